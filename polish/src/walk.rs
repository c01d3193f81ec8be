use crate::syntax::Node;

/// A left-to-right fold over a syntax tree.
///
/// Number leaves are visited through [`Walker::number`]. An application first
/// walks its leading operand and hands it to [`Walker::seed`] together with the
/// operator symbol, then walks every remaining operand in order and merges it
/// into the accumulator with [`Walker::combine`].
pub trait Walker {
    type Output;

    fn number(&mut self, text: &str) -> Self::Output;

    fn seed(&mut self, operator: &str, first: Self::Output) -> Self::Output;

    fn combine(&mut self, operator: &str, acc: Self::Output, next: Self::Output) -> Self::Output;
}

pub fn walk<W: Walker + ?Sized>(node: &Node, walker: &mut W) -> W::Output {
    match node {
        Node::Number(text) => walker.number(text),
        Node::Expr(app) | Node::Program(app) => {
            let first = walk(&app.first, walker);
            let seed = walker.seed(&app.operator, first);
            app.rest.iter().fold(seed, |acc, operand| {
                let next = walk(operand, walker);
                walker.combine(&app.operator, acc, next)
            })
        }
    }
}
