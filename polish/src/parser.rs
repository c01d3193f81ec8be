use crate::syntax::{Application, Command, Node, OPERATORS};
use chumsky::{BoxedParser, prelude::*};
use util::parser::{signed_digits, symbol};

/// The compiled grammar. Build it once and reuse it for every line.
pub struct Grammar {
    command: BoxedParser<'static, char, Command, Simple<char>>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            command: Command::parser().boxed(),
        }
    }

    pub fn parse(&self, input: &str) -> Result<Command, Vec<Simple<char>>> {
        self.command.parse(input)
    }
}

impl Application {
    /// `operator expr+`
    fn parser(
        expr: impl Parser<char, Node, Error = Simple<char>> + Clone,
    ) -> impl Parser<char, Self, Error = Simple<char>> + Clone {
        let operator = symbol(OPERATORS).labelled("operator");

        operator
            .then(expr.clone().padded())
            .then(expr.padded().repeated())
            .map(|((operator, first), rest)| Self::new(operator, first, rest))
    }
}

impl Node {
    /// `number | '(' operator expr+ ')'`
    fn expr_parser() -> impl Parser<char, Self, Error = Simple<char>> + Clone {
        recursive(|expr| {
            let number = signed_digits().map(Self::Number).labelled("number");

            let parens = Application::parser(expr)
                .padded()
                .delimited_by(just('('), just(')'))
                .map(Self::Expr);

            number.or(parens)
        })
    }

    /// `operator expr+` spanning the whole input.
    fn program_parser() -> impl Parser<char, Self, Error = Simple<char>> + Clone {
        Application::parser(Self::expr_parser())
            .padded()
            .map(Self::Program)
    }
}

impl Command {
    fn parser() -> impl Parser<char, Self, Error = Simple<char>> {
        let command = |name: &'static str| {
            just(':')
                .then(text::keyword(name))
                .ignore_then(Node::program_parser())
        };

        let eval = command("eval").map(Self::Eval);
        let leaves = command("leaves").map(Self::Leaves);
        let branches = command("branches").map(Self::Branches);
        let tree = command("tree").map(Self::Tree);
        let program = Node::program_parser().map(Self::Eval);

        choice((eval, leaves, branches, tree, program)).then_ignore(end())
    }
}
