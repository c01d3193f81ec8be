use polish::{Command, Error, Grammar, Node, Value};
use pretty_assertions::assert_eq;

fn eval(grammar: &Grammar, input: &str) -> Value {
    match grammar.parse(input) {
        Ok(Command::Eval(t)) => t.eval(),
        other => panic!("expected a program for {input:?}, got {other:?}"),
    }
}

fn run(grammar: &Grammar, input: &str) -> String {
    grammar.parse(input).expect(input).run()
}

#[test]
fn evaluates_programs() {
    let grammar = Grammar::new();
    assert_eq!(eval(&grammar, "+ 1 2"), Ok(3));
    assert_eq!(eval(&grammar, "+ 1 (* 2 3)"), Ok(7));
    assert_eq!(eval(&grammar, "- 10 1 2"), Ok(7));
    assert_eq!(eval(&grammar, "^ 5 2"), Ok(7));
    assert_eq!(eval(&grammar, "% 17 5"), Ok(2));
    assert_eq!(eval(&grammar, "/ 7 2"), Ok(3));
    assert_eq!(eval(&grammar, "* (- 0 3) (+ 1 1) (/ 10 5)"), Ok(-12));
    assert_eq!(eval(&grammar, "- 5"), Ok(5));
}

#[test]
fn divide_by_zero() {
    let grammar = Grammar::new();
    assert_eq!(eval(&grammar, "/ 5 0"), Err(Error::DivideByZero));
    assert_eq!(run(&grammar, "/ 5 0"), "Error: Cannot divide by zero");
}

#[test]
fn errors_propagate_to_the_root() {
    let grammar = Grammar::new();
    assert_eq!(
        eval(&grammar, "+ 1 (* 2 (/ 3 0)) 4"),
        Err(Error::DivideByZero)
    );
    assert_eq!(
        eval(&grammar, "+ (/ 1 0) 99999999999999999999"),
        Err(Error::DivideByZero)
    );
    assert_eq!(
        eval(&grammar, "+ 99999999999999999999 (/ 1 0)"),
        Err(Error::InvalidNumber)
    );
}

#[test]
fn out_of_range_literal() {
    let grammar = Grammar::new();
    assert_eq!(
        eval(&grammar, "+ 9223372036854775808 1"),
        Err(Error::InvalidNumber)
    );
    assert_eq!(
        run(&grammar, "+ 9223372036854775808 1"),
        "Error: Invalid Number!"
    );
    assert_eq!(
        eval(&grammar, "+ -9223372036854775808 0"),
        Ok(i64::MIN)
    );
}

#[test]
fn analytics_commands() {
    let grammar = Grammar::new();
    assert_eq!(run(&grammar, ":leaves + 1 (* 2 3)"), "3");
    assert_eq!(run(&grammar, ":branches + 1 (* 2 3)"), "2");
    assert_eq!(run(&grammar, ":tree   +  1 (  * 2   3 )"), "+ 1 (* 2 3)");
    assert_eq!(run(&grammar, ":eval + 1 (* 2 3)"), "7");
}

#[test]
fn malformed_input_yields_diagnostics() {
    let grammar = Grammar::new();
    for input in ["5", "(+ 1 2", "+ 1 2)", "", "+ a b"] {
        let errs = grammar.parse(input).expect_err(input);
        assert!(!errs.is_empty(), "{input:?}");
    }
}

#[test]
fn grammar_is_reusable_across_lines() {
    let grammar = Grammar::new();
    let lines = ["+ 1 2", "oops", "* 3 3", "/ 1 0"];
    let outputs = lines
        .iter()
        .map(|line| grammar.parse(line).map(|cmd| cmd.run()).ok())
        .collect::<Vec<_>>();
    assert_eq!(
        outputs,
        [
            Some("3".to_string()),
            None,
            Some("9".to_string()),
            Some("Error: Cannot divide by zero".to_string()),
        ]
    );
}

#[test]
fn trees_can_be_built_by_hand() {
    let tree = Node::program("+", Node::number("1"), vec![Node::number("2")]);
    assert_eq!(Command::Eval(tree).run(), "3");
}
