use std::fmt::{self, Display, Formatter};

pub const OPERATORS: &str = "+-*/%^";
pub const COMMANDS: &[&str] = &["eval", "leaves", "branches", "tree"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Number(String),
    Expr(Application),
    Program(Application),
}

/// An operator symbol applied to one or more operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub operator: String,
    pub first: Box<Node>,
    pub rest: Vec<Node>,
}

impl Node {
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    pub fn expr(operator: impl Into<String>, first: Self, rest: Vec<Self>) -> Self {
        Self::Expr(Application::new(operator, first, rest))
    }

    pub fn program(operator: impl Into<String>, first: Self, rest: Vec<Self>) -> Self {
        Self::Program(Application::new(operator, first, rest))
    }
}

impl Application {
    pub fn new(operator: impl Into<String>, first: Node, rest: Vec<Node>) -> Self {
        Self {
            operator: operator.into(),
            first: Box::new(first),
            rest,
        }
    }

    pub fn operands(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(self.first.as_ref()).chain(&self.rest)
    }
}

impl Display for Application {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operator)?;
        for operand in self.operands() {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Expr(app) => write!(f, "({app})"),
            Self::Program(app) => write!(f, "{app}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Eval(Node),
    Leaves(Node),
    Branches(Node),
    Tree(Node),
}
