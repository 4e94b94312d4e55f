use super::*;

fn translate(input: &str) -> Translation {
    Parser::new(input).run()
}

fn messages(translation: &Translation) -> Vec<String> {
    translation
        .diagnostics
        .iter()
        .map(|d| d.message.clone())
        .collect()
}

fn assert_translates(input: &str, expected: &str) {
    let translation = translate(input);
    assert_eq!(
        translation.status,
        CompileStatus::Finished,
        "diagnostics: {:?}",
        translation.diagnostics
    );
    assert_eq!(translation.output.as_deref(), Some(expected));
}

#[test]
fn test_minimal_program() {
    assert_translates(
        "programa p;\nvar x : inteiro;\ninicio\n  x := 1;\n  escreve(x);\nfim.",
        "#include <stdio.h>\n\nint x;\n\nint main(void) {\n    x = 1;\n    printf(\" %d\", x);\n    return 0;\n}\n",
    );
}

#[test]
fn test_declaration_names_are_reversed() {
    let translation = translate("programa p;\nvar a, b, c : real;\nvar d : inteiro;\ninicio fim.");
    let output = translation.output.unwrap();
    assert!(output.contains("\nfloat c, b, a;\nint d;\n"), "{output}");
}

#[test]
fn test_procedure_with_parameters() {
    let input = "programa t;
var i : inteiro;
var g : real;
procedimento soma(a, b : inteiro; c : real);
var r : real;
inicio
  r := a + c;
  escreve(r);
fim;
inicio
  soma(i; i; g);
fim.";
    assert_translates(
        input,
        "#include <stdio.h>\n\nint i;\nfloat g;\n\nvoid soma(int a, int b, float c) {\n    float r;\n    r = a + c;\n    printf(\" %f\", r);\n}\n\nint main(void) {\n    soma(i, i, g);\n    return 0;\n}\n",
    );
}

#[test]
fn test_control_flow() {
    let input = "programa c;
var i : inteiro;
inicio
  le(i);
  enquanto i < 10 faca
    i := i + 1;
  se i = 10 entao
    inicio
      escreve(i);
    fim
  senao
    i := -i;
fim.";
    assert_translates(
        input,
        "#include <stdio.h>\n\nint i;\n\nint main(void) {\n    scanf(\" %d\", &i);\n    while (i < 10)\n        i = i + 1;\n    if (i == 10) {\n        printf(\" %d\", i);\n    }\n    else\n        i = -i;\n    return 0;\n}\n",
    );
}

#[test]
fn test_expressions() {
    let translation = translate(
        "programa e;\nvar x, y : real;\ninicio\n  x := 2,5 * (y - -x) / 3;\n  se x <> y entao y := x fim;\nfim.",
    );
    let output = translation.output.unwrap();
    assert!(output.contains("    x = 2.5 * (y - -x) / 3;\n"), "{output}");
    assert!(output.contains("    if (x != y)\n        y = x;\n"), "{output}");
}

#[test]
fn test_read_write_repeats_operands() {
    let translation =
        translate("programa p;\nvar a : inteiro;\ninicio\n  escreve(a, a);\n  le(a, a);\nfim.");
    let output = translation.output.unwrap();
    assert!(output.contains("printf(\" %d %d\", a, a);"), "{output}");
    assert!(output.contains("scanf(\" %d %d\", &a, &a);"), "{output}");
}

#[test]
fn test_local_shadows_global() {
    let translation = translate(
        "programa p;\nvar a : inteiro;\nprocedimento q;\nvar a : real;\ninicio\n  a := 1,5;\nfim;\ninicio\n  q;\n  a := 2;\nfim.",
    );
    assert_eq!(translation.status, CompileStatus::Finished);
    let output = translation.output.unwrap();
    assert!(output.contains("void q() {\n    float a;\n    a = 1.5;\n}"), "{output}");
    assert!(output.contains("    q();\n    a = 2;\n"), "{output}");
}

#[test]
fn test_missing_period() {
    let translation = translate("programa p;\nvar x : inteiro;\ninicio\n  x := 1;\nfim");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(translation.diagnostics.len(), 1);
    assert_eq!(translation.diagnostics[0].line, 5);
    assert_eq!(messages(&translation), vec!["expected `.`, got <eof>"]);
    assert!(translation.output.is_none());
}

#[test]
fn test_text_after_program() {
    let translation = translate("programa p;\ninicio\nfim.\nx");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(
        messages(&translation),
        vec!["expected end of file, got `x`"]
    );

    let translation = translate("programa p;\ninicio\nfim x");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
}

#[test]
fn test_missing_separator_recovers() {
    let translation =
        translate("programa p;\nvar x : inteiro;\ninicio\n  x := 1\n  x := 2;\nfim.");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(translation.diagnostics[0].line, 5);
    assert_eq!(messages(&translation), vec!["expected `;`, got `x`"]);
}

#[test]
fn test_missing_program_keyword() {
    let translation = translate("p;\ninicio\nfim.");
    assert_eq!(
        messages(&translation),
        vec!["expected `programa`, got `p`"]
    );
}

#[test]
fn test_missing_type_drains_workspace() {
    let translation = translate(
        "programa p;\nvar a, b : ;\nvar c : inteiro;\ninicio\n  c := 1;\nfim.",
    );
    assert_eq!(
        messages(&translation),
        vec!["expected `inteiro` or `real`, got `;`"]
    );
}

#[test]
fn test_missing_comma_is_reported() {
    let translation = translate("programa p;\nvar a b : inteiro;\ninicio fim.");
    assert_eq!(messages(&translation), vec!["expected `:`, got `b`"]);
}

#[test]
fn test_missing_var_keyword() {
    let translation = translate("programa p;\na : inteiro;\ninicio\n  a := 1;\nfim.");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(translation.diagnostics[0].line, 2);
    assert_eq!(messages(&translation), vec!["expected `var`, got `a`"]);

    let translation = translate(
        "programa p;\nprocedimento q;\nn : real;\ninicio\n  n := 1,5;\nfim;\ninicio fim.",
    );
    assert_eq!(messages(&translation), vec!["expected `var`, got `n`"]);
}

#[test]
fn test_undeclared_names() {
    let translation = translate("programa p;\ninicio\n  y := 1;\n  q;\nfim.");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(2));
    assert_eq!(translation.diagnostics[0].line, 3);
    assert_eq!(
        messages(&translation),
        vec!["undeclared variable `y`", "undeclared procedure `q`"]
    );
}

#[test]
fn test_redeclaration() {
    let translation = translate(
        "programa p;\nvar a : inteiro;\nvar a : real;\nprocedimento a;\ninicio fim;\ninicio fim.",
    );
    assert_eq!(
        messages(&translation),
        vec![
            "variable/procedure `a` already declared",
            "procedure `a` already declared"
        ]
    );
}

#[test]
fn test_real_assigned_to_integer() {
    let translation =
        translate("programa p;\nvar n : inteiro;\nvar r : real;\ninicio\n  n := 1 + r;\n  r := n;\nfim.");
    assert_eq!(
        messages(&translation),
        vec!["real value assigned to integer variable `n`"]
    );
}

#[test]
fn test_read_write_mismatch() {
    let translation =
        translate("programa p;\nvar a : inteiro;\nvar r : real;\ninicio\n  escreve(a, r);\n  le();\nfim.");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(2));
    assert_eq!(
        messages(&translation),
        vec![
            "read/write arguments must share one type: `r` is real, expected integer",
            "read/write command without arguments"
        ]
    );
}

#[test]
fn test_argument_mismatch_continues() {
    let input = "programa p;
var x : inteiro;
var r : real;
procedimento q(a, b : inteiro);
inicio
fim;
inicio
  q(x; r);
  z := 1;
fim.";
    let translation = translate(input);
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(2));
    assert_eq!(translation.diagnostics[0].line, 8);
    assert_eq!(
        messages(&translation),
        vec![
            "wrong number or type of arguments for `q`: expected 2 integer and 0 real, got 1 integer and 1 real",
            "undeclared variable `z`"
        ]
    );
}

#[test]
fn test_trailing_argument_separator() {
    let translation = translate(
        "programa p;\nvar x : inteiro;\nprocedimento q(a : inteiro);\ninicio fim;\ninicio\n  q(x;);\nfim.",
    );
    assert_eq!(
        messages(&translation),
        vec!["expected identifier, got `)`"]
    );
}

#[test]
fn test_if_without_terminator() {
    let translation =
        translate("programa p;\nvar x : inteiro;\ninicio\n  se x > 0 entao x := 0;\nfim.");
    assert_eq!(
        messages(&translation),
        vec!["expected `fim` or `senao`, got `;`"]
    );
}

#[test]
fn test_unexpected_end_of_file() {
    let translation = translate("programa p;\nvar x : inteiro;\ninicio\n  x := ");
    assert_eq!(translation.status, CompileStatus::UnexpectedEof);
    assert!(translation.diagnostics.is_empty());
    assert!(translation.output.is_none());

    let translation = translate("programa p;\ninicio\n  { sem fim\n");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(messages(&translation), vec!["unterminated comment"]);
    assert_eq!(translation.diagnostics[0].line, 3);
}

#[test]
fn test_errors_before_end_of_file_win() {
    let translation = translate("programa p;\ninicio\n  y := 1;\n  x := ");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(2));
    assert_eq!(
        messages(&translation),
        vec!["undeclared variable `y`", "undeclared variable `x`"]
    );
    assert!(translation.output.is_none());
}

#[test]
fn test_empty_file() {
    assert_eq!(translate("").status, CompileStatus::EmptyFile);
    assert_eq!(translate(" \n{ nada }\n").status, CompileStatus::EmptyFile);
    assert!(translate("").output.is_none());
    assert_eq!(translate("@").status, CompileStatus::WrittenWithErrors(1));
}

#[test]
fn test_lexical_errors_do_not_stop_the_pass() {
    let translation = translate("programa p;\nvar x : inteiro;\ninicio\n  x := 1 @;\nfim.");
    assert_eq!(translation.status, CompileStatus::WrittenWithErrors(1));
    assert_eq!(messages(&translation), vec!["invalid token '@'"]);
}

#[test]
fn test_status_messages() {
    assert_eq!(CompileStatus::Finished.to_string(), "compilation finished");
    assert_eq!(CompileStatus::UnexpectedEof.to_string(), "unexpected end of file");
    assert_eq!(
        CompileStatus::WrittenWithErrors(3).to_string(),
        "program written with 3 errors"
    );
    assert_eq!(CompileStatus::EmptyFile.to_string(), "empty file");
}
