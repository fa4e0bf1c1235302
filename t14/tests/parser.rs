use t14::Script;
use t14::command::condition::{Comparison, Conditional};
use t14::command::template::{Template, TemplatePart};
use t14::command::{Command, Operand};
use t14::parser::{classify, parse_template};

fn literal(s: &str) -> TemplatePart {
    TemplatePart::Literal(s.to_string())
}

fn variable(s: &str) -> TemplatePart {
    TemplatePart::Variable(s.to_string())
}

#[test]
fn comments_and_blank_lines() {
    assert_eq!(classify(""), None);
    assert_eq!(classify("   \t"), None);
    assert_eq!(classify("# a comment with [x]"), None);
    assert_eq!(classify("#"), None);
}

#[test]
fn indented_hash_is_not_a_comment() {
    assert!(matches!(classify("  # not a comment"), Some(Command::Text(_))));
}

#[test]
fn terminate() {
    assert_eq!(classify("::exit"), Some(Command::Terminate));
    assert_eq!(classify("::quit"), Some(Command::Terminate));
    assert_eq!(classify("  ::exit  "), Some(Command::Terminate));
    assert!(matches!(classify("::exit now"), Some(Command::Text(_))));
}

#[test]
fn block_start_and_end() {
    assert_eq!(
        classify("::start[main]"),
        Some(Command::BlockStart("main".to_string()))
    );
    assert_eq!(
        classify("::start[my_block-2]"),
        Some(Command::BlockStart("my_block-2".to_string()))
    );
    assert_eq!(classify("::end"), Some(Command::BlockEnd));
    // Not labels; these read as (unknown) conversion tokens instead.
    assert!(matches!(classify("::start[bad name]"), Some(Command::Conversion(_))));
    assert!(matches!(classify("::start[]"), Some(Command::Conversion(_))));
    assert!(matches!(classify("::end here"), Some(Command::Text(_))));
}

#[test]
fn invoke() {
    assert_eq!(
        classify("::run[greet]"),
        Some(Command::Invoke("greet".to_string()))
    );
    assert!(matches!(classify("::run [greet]"), Some(Command::Text(_))));
}

#[test]
fn assign_literal() {
    assert_eq!(
        classify("::set [name] = Hello World "),
        Some(Command::Assign {
            variable: "name".to_string(),
            value: "Hello World".to_string(),
        })
    );
    assert_eq!(
        classify("::set [greeting] = Hi [name]"),
        Some(Command::Assign {
            variable: "greeting".to_string(),
            value: "Hi [name]".to_string(),
        })
    );
}

#[test]
fn assign_without_value_is_not_a_command() {
    assert!(!matches!(
        classify("::set [name] =  "),
        Some(Command::Assign { .. }) | Some(Command::Copy { .. })
    ));
}

#[test]
fn a_single_variable_token_is_always_a_copy() {
    assert_eq!(
        classify("::set [a] = [b]"),
        Some(Command::Copy {
            target: "a".to_string(),
            source: "b".to_string(),
        })
    );
}

#[test]
fn conditional_with_else() {
    assert_eq!(
        classify("::if [[x] <= 10]->[small] else [large]"),
        Some(Command::Conditional(Conditional {
            left: Operand::Variable("x".to_string()),
            comparison: Comparison::LessThanOrEqual,
            right: Operand::Literal("10".to_string()),
            then_block: "small".to_string(),
            else_block: Some("large".to_string()),
        }))
    );
}

#[test]
fn conditional_operators() {
    for comparison in Comparison::ALL {
        let line = format!("::if [1 {} 2]->[a]", comparison);
        match classify(&line) {
            Some(Command::Conditional(c)) => {
                assert_eq!(c.comparison, comparison);
                assert_eq!(c.left, Operand::Literal("1".to_string()));
                assert_eq!(c.right, Operand::Literal("2".to_string()));
                assert_eq!(c.else_block, None);
            }
            other => panic!("{}: {:?}", line, other),
        }
    }
}

#[test]
fn conditional_operands_may_contain_spaces() {
    match classify("::if [hello world != good bye]->[a]") {
        Some(Command::Conditional(c)) => {
            assert_eq!(c.left, Operand::Literal("hello world".to_string()));
            assert_eq!(c.right, Operand::Literal("good bye".to_string()));
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn malformed_conditionals_fall_through() {
    for line in [
        "::if [1 == 1]",
        "::if [1==1]->[a]",
        "::if [1 == 1]->[bad name]",
        "::if [1 == 1]->[a] otherwise [b]",
        "::if [1 == 1]->[a] else b",
        "::if [ == 1]->[a]",
    ] {
        assert!(
            !matches!(classify(line), Some(Command::Conditional(_))),
            "{}",
            line
        );
    }
}

#[test]
fn identify() {
    assert_eq!(
        classify("::wtf[48656C6C6F]"),
        Some(Command::Identify(Operand::Literal("48656C6C6F".to_string())))
    );
    assert_eq!(
        classify("::wtf[[mystery]]"),
        Some(Command::Identify(Operand::Variable("mystery".to_string())))
    );
}

#[test]
fn conversion_and_text() {
    assert!(matches!(classify("::dec->bin[10]"), Some(Command::Conversion(_))));
    assert!(matches!(classify("x is ::dec->hex[[x]]!"), Some(Command::Conversion(_))));
    assert!(matches!(classify("Hello [name]"), Some(Command::Text(_))));
}

#[test]
fn template_parts() {
    assert_eq!(
        parse_template("Hello [name], ::dec->bin[[n]] [not a var]"),
        Template {
            parts: vec![
                literal("Hello "),
                variable("name"),
                literal(", "),
                TemplatePart::Conversion {
                    operator: "dec->bin".to_string(),
                    value: Operand::Variable("n".to_string()),
                    raw: "::dec->bin[[n]]".to_string(),
                },
                literal(" [not a var]"),
            ],
        }
    );
}

#[test]
fn template_conversion_value_balances_brackets() {
    let template = parse_template("::text->morse[a [b] c]]");
    assert_eq!(
        template.parts,
        vec![
            TemplatePart::Conversion {
                operator: "text->morse".to_string(),
                value: Operand::Literal("a [b] c".to_string()),
                raw: "::text->morse[a [b] c]".to_string(),
            },
            literal("]"),
        ]
    );
}

#[test]
fn template_unclosed_tokens_are_literal() {
    assert_eq!(
        parse_template("::dec->bin[10 and [x"),
        Template::literal("::dec->bin[10 and [x")
    );
}

#[test]
fn template_handles_multibyte_text() {
    assert_eq!(
        parse_template("héllo [wörld] [x]"),
        Template {
            parts: vec![literal("héllo [wörld] "), variable("x")],
        }
    );
}

#[test]
fn script_spans() {
    let script = Script::parse("::start[main]\r\nHello\n\n::end", 3);
    assert_eq!(script.source_id, 3);
    assert_eq!(script.len(), 4);
    let spans: Vec<_> = script.lines.iter().map(|l| l.span.clone()).collect();
    assert_eq!(spans, vec![0..13, 15..20, 21..21, 22..27]);
    assert_eq!(script.line(1).map(|l| l.text.as_str()), Some("Hello"));
    assert_eq!(script.line(2).and_then(|l| l.command.as_ref()), None);
}

#[test]
fn trailing_newline_does_not_add_a_line() {
    assert_eq!(Script::parse("a\nb\n", 0).len(), 2);
    assert!(Script::parse("", 0).is_empty());
}
