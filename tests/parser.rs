use core_lang::{
    ast::{Condition, Expression, Statement},
    error::ParseError,
    interpreter::symbol_table::{MAX_DECLARATIONS, SymbolTable},
    parse_source, print_source, tokenize_source,
};

fn parse(src: &str) -> Result<core_lang::ast::Program, ParseError> {
    parse_source(src, &mut SymbolTable::new())
}

fn assert_parses(src: &str) {
    if let Err(e) = parse(src) {
        panic!("Program failed to parse: {e}");
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(_) => panic!("Program parsed but was expected to fail"),
        Err(e) => e,
    }
}

fn declarations(count: usize) -> String {
    let names: Vec<String> = (0..count).map(|i| format!("V{i}")).collect();
    format!("program int {}; begin V0 = 1; end", names.join(", "))
}

#[test]
fn redeclaration_is_rejected() {
    assert!(matches!(parse_error("program int X, X; begin X = 1; end"),
                     ParseError::Redeclared { line: 1, .. }));
    assert!(matches!(parse_error("program\n  int X;\n\n\n  int Y, X;\nbegin X = 1; end"),
                     ParseError::Redeclared { line: 5, .. }));
}

#[test]
fn undeclared_use_is_rejected_everywhere() {
    for src in ["program int X; begin Y = 1; end",
                "program int X; begin X = Y; end",
                "program int X; begin X = 1 + ( 2 * Y ); end",
                "program int X; begin if ( Y > 1 ) then X = 1; end; end",
                "program int X; begin while !( X == Y ) loop X = 1; end; end",
                "program int X; begin read X, Y; end",
                "program int X; begin write Y; end"]
    {
        assert!(matches!(parse_error(src), ParseError::Undeclared { ref name, .. } if name == "Y"),
                "{src}");
    }
}

#[test]
fn declaration_capacity_is_twenty() {
    assert_eq!(MAX_DECLARATIONS, 20);
    assert_parses(&declarations(20));
    assert!(matches!(parse_error(&declarations(21)),
                     ParseError::NoMoreDeclarations { ref name, .. } if name == "V20"));
}

#[test]
fn redeclaration_wins_over_full_table() {
    let names: Vec<String> = (0..20).map(|i| format!("V{i}")).collect();
    let src = format!("program int {}, V3; begin V0 = 1; end", names.join(", "));
    assert!(matches!(parse_error(&src), ParseError::Redeclared { .. }));
}

#[test]
fn empty_blocks_are_rejected() {
    assert!(matches!(parse_error("program int X; begin end"),
                     ParseError::EmptySequence { construct: "statement list", .. }));
    assert!(matches!(parse_error("program begin end"),
                     ParseError::EmptySequence { construct: "declaration list", .. }));
    assert!(matches!(parse_error("program int X; begin if ( X > 1 ) then else X = 1; end; end"),
                     ParseError::EmptySequence { construct: "statement list", .. }));
}

#[test]
fn errors_surface_in_token_order() {
    // Context error appears before the syntax error.
    assert!(matches!(parse_error("program int X; begin Y = ; end"),
                     ParseError::Undeclared { .. }));
    // Syntax error appears before the context error.
    assert!(matches!(parse_error("program int X; begin X = ; Y = 1; end"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn syntax_errors_are_classified() {
    assert!(matches!(parse_error("program int X; begin X = 1 end"),
                     ParseError::ConsumeMismatch { line: 1, .. }));
    assert!(matches!(parse_error("program int X; begin X = 1;"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("program int X; begin X = 1; end X"),
                     ParseError::ConsumeMismatch { .. }));
    assert!(matches!(parse_error("program int X; begin if ( X = 1 ) then X = 1; end; end"),
                     ParseError::ConsumeMismatch { .. }));
    assert!(matches!(parse_error("program int X; begin if [ ( X > 1 ) ( X < 3 ) ] then X = 1; end; end"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn malformed_lexemes_are_invalid_tokens() {
    for src in ["program int x; begin x = 1; end",
                "program int ABCDEFGHI; begin ABCDEFGHI = 1; end",
                "program int X; begin X = 12AB; end",
                "program int X; begin X = 2147483648; end",
                "program int X; begin X = 1 / 2; end"]
    {
        assert!(matches!(parse_error(src), ParseError::InvalidToken { .. }), "{src}");
    }
    assert_parses("program int ABCDEFGH, X1; begin ABCDEFGH = 2147483647; X1 = 0; end");
}

#[test]
fn every_comparison_operator_parses() {
    for op in ["!=", "==", ">=", "<=", ">", "<"] {
        let src = format!("program int X; begin if ( X {op} 1 ) then X = 1; end; end");
        let printed = print_source(&src).unwrap_or_else(|e| panic!("{op}: {e}"));
        assert!(printed.contains(&format!("if ( X {op} 1 ) then")), "{printed}");
    }
}

#[test]
fn expressions_lean_right() {
    let program = parse("program int X; begin X = 1 - 2 + 3; end").unwrap();
    let Statement::Assign { value, .. } = &program.statements.statements[0] else {
        panic!("expected an assignment");
    };

    let Expression::Minus { rest, .. } = value else {
        panic!("expected a subtraction at the root, got {value:?}");
    };
    assert!(matches!(**rest, Expression::Plus { .. }));
}

#[test]
fn conditions_nest() {
    let program =
        parse("program int X; begin while [ !( X > 1 ) or [ ( X < 5 ) and ( X != 3 ) ] ] loop X = 1; end; end")
            .unwrap();
    let Statement::While { condition, .. } = &program.statements.statements[0] else {
        panic!("expected a loop");
    };

    let Condition::Or { left, right, .. } = condition else {
        panic!("expected 'or' at the root, got {condition:?}");
    };
    assert!(matches!(**left, Condition::Not { .. }));
    assert!(matches!(**right, Condition::And { .. }));
}

#[test]
fn nodes_record_their_lines() {
    let program = parse("program\nint X;\nbegin\nX = 1;\nif ( X > 0 ) then\nwrite X;\nend;\nend")
        .unwrap();
    let lines: Vec<usize> =
        program.statements.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![4, 5]);

    let program = parse("program int X; begin while\n\n!( X > 0 ) loop X = 1; end; end").unwrap();
    let Statement::While { condition, line, .. } = &program.statements.statements[0] else {
        panic!("expected a loop");
    };
    assert_eq!(*line, 1);
    assert_eq!(condition.line_number(), 3);
}

#[test]
fn printing_is_canonical() {
    let src = "program int X,Y; int Z; begin read X; Y=X*(2+3); \
               if [ (X>Y) and !(Y==0) ] then write X; else while (Z<3) loop Z=Z+1; end; end; \
               write Y; end";
    let expected = "program
  int X, Y;
  int Z;
  begin
    read X;
    Y = X * ( 2 + 3 );
    if [ ( X > Y ) and !( Y == 0 ) ] then
      write X;
    else
      while ( Z < 3 ) loop
        Z = Z + 1;
      end;
    end;
    write Y;
  end
";
    assert_eq!(print_source(src).unwrap(), expected);
}

#[test]
fn printed_programs_parse_back_to_the_same_tree() {
    let src = "program
  int A, B;
  begin
    A = 1 - ( 2 - 3 ) * B - 4;
    while [ !( A < B ) or [ ( A == 1 ) and !!( B != 0 ) ] ] loop
      A = ( ( A ) );
    end;
    if ( A >= 2 ) then
      read A, B;
    else
      write A;
    end;
  end
";
    let printed = print_source(src).unwrap();
    assert_eq!(printed, src);

    let original = parse(src).unwrap();
    let reparsed = parse(&printed).unwrap();
    assert_eq!(original, reparsed);
}

#[test]
fn tree_comparison_sees_regrouping() {
    let flat = parse("program int A; begin A = 1 - 2 - 3; end").unwrap();
    let grouped = parse("program int A; begin A = ( 1 - 2 ) - 3; end").unwrap();
    assert_ne!(flat, grouped);

    let nested_or = parse("program int A; begin while [ ( A < 1 ) or [ ( A > 2 ) and ( A > 3 ) ] ] loop A = 1; end; end")
        .unwrap();
    let nested_and = parse("program int A; begin while [ [ ( A < 1 ) or ( A > 2 ) ] and ( A > 3 ) ] loop A = 1; end; end")
        .unwrap();
    assert_ne!(nested_or, nested_and);
}

#[test]
fn token_codes_follow_declaration_order() {
    let codes: Vec<u8> = tokenize_source("program begin end int if then else while loop read write \
                                          and or ; , = ! [ ] ( ) + - * != == >= <= > < 7 X")
        .unwrap()
        .iter()
        .map(|token| token.kind.code())
        .collect();
    assert_eq!(codes, (1..=33).collect::<Vec<u8>>());
}
