use std::io::Cursor;

use opslang::run_source;

fn run_with_input(source: &str, input: &str) -> String {
    let mut input = Cursor::new(input.to_string());
    let mut output = Vec::new();

    if let Err(e) = run_source(source, &mut input, &mut output) {
        panic!("Program failed: {e}");
    }
    String::from_utf8(output).expect("output is not UTF-8")
}

fn run(source: &str) -> String {
    run_with_input(source, "")
}

fn run_error(source: &str, input: &str) -> String {
    let mut input = Cursor::new(input.to_string());
    let mut output = Vec::new();

    match run_source(source, &mut input, &mut output) {
        Ok(()) => panic!("Program succeeded but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn scalar_assign_and_print() {
    assert_eq!(run("int a; begin a = 2 + 3 * 4; output(a); end"), "14\n");
}

#[test]
fn conditional_branch_takes_the_then_arm() {
    let source = "int a; int b; begin a = 5; b = 0; if (a > 3) begin b = 1; end else begin \
                  b = 2; end ; output(b); end";
    assert_eq!(run(source), "1\n");
}

#[test]
fn conditional_branch_takes_the_else_arm() {
    let source = "int a; int b; begin a = 2; b = 0; if (a > 3) begin b = 1; end else begin \
                  b = 2; end ; output(b); end";
    assert_eq!(run(source), "2\n");
}

#[test]
fn while_loop_sums_a_range() {
    let source = "int i; int s; begin i = 0; s = 0; while (i < 5) begin s = s + i; i = i + 1; \
                  end ; output(s); end";
    assert_eq!(run(source), "10\n");
}

#[test]
fn array_filled_from_input_sums_its_elements() {
    let source = "arr x[3]; int i; begin i = 0; while (i < 3) begin input(x[i]); i = i + 1; \
                  end ; output(x[0] + x[1] + x[2]); end";
    assert_eq!(run_with_input(source, "7 2 11"), "20\n");
}

#[test]
fn input_values_may_arrive_one_per_line() {
    let source = "int a; int b; begin input(a); input(b); output(a - b); end";
    assert_eq!(run_with_input(source, "9\n4\n"), "5\n");
}

#[test]
fn equality_and_inequality_relations() {
    let source = "int a; begin a = 3; if (a ~ 3) begin output(1); end ; if (a ! 4) begin \
                  output(2); end ; end";
    assert_eq!(run(source), "1\n2\n");
}

#[test]
fn out_of_bounds_write_reports_the_source_line() {
    let message = run_error("arr q[2]; begin q[2] = 1; end", "");
    assert!(message.contains("line 1"), "got: {message}");
    assert!(message.contains("out of bounds"), "got: {message}");
}

#[test]
fn negative_index_is_out_of_bounds() {
    let source = "arr q[2]; int i; begin i = 0 - 1; q[i] = 5; end";
    let message = run_error(source, "");
    assert!(message.contains("out of bounds"), "got: {message}");
}

#[test]
fn declaration_only_program_runs_and_prints_nothing() {
    assert_eq!(run("int a; arr b[4];"), "");
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(run("int a; begin a = 7 / 2; output(a); end"), "3\n");
    assert_eq!(run("int a; begin a = (0 - 7) / 2; output(a); end"), "-3\n");
}

#[test]
fn division_by_zero_is_an_error() {
    let message = run_error("int a; begin a = 1 / 0; end", "");
    assert!(message.contains("Division by zero"), "got: {message}");
}

#[test]
fn division_by_a_computed_zero_is_an_error() {
    let source = "int a; int b; begin b = 3 - 3; a = 1 / b; end";
    let message = run_error(source, "");
    assert!(message.contains("Division by zero"), "got: {message}");
}

#[test]
fn trig_results_truncate_toward_zero() {
    assert_eq!(run("int a; begin a = sin(1); output(a); end"), "0\n");
    assert_eq!(run("int a; begin a = sin(0); output(a); end"), "0\n");
    assert_eq!(run("int a; begin a = cos(0); output(a); end"), "1\n");
    assert_eq!(run("int a; begin a = tg(0); output(a); end"), "0\n");
}

#[test]
fn cotangent_at_zero_is_an_error() {
    let message = run_error("int a; begin a = ctg(0); end", "");
    assert!(message.contains("Cotangent"), "got: {message}");
}

#[test]
fn statement_form_trig_call_is_legal() {
    assert_eq!(run("begin sin(0); end"), "");
}

#[test]
fn while_loop_computes_a_factorial() {
    let source = "int n; int f; begin n = 5; f = 1; while (n > 1) begin f = f * n; n = n - 1; \
                  end ; output(f); end";
    assert_eq!(run(source), "120\n");
}

#[test]
fn nested_loops_fill_and_scan_an_array() {
    let source = "arr grid[9]; int i; int hits; begin i = 0; while (i < 9) begin grid[i] = i / \
                  3; i = i + 1; end ; hits = 0; i = 0; while (i < 9) begin if (grid[i] ~ 1) \
                  begin hits = hits + 1; end ; i = i + 1; end ; output(hits); end";
    assert_eq!(run(source), "3\n");
}

#[test]
fn scalar_variables_start_at_zero() {
    assert_eq!(run("int a; begin output(a); end"), "0\n");
    assert_eq!(run("arr b[2]; begin output(b[1]); end"), "0\n");
}

#[test]
fn malformed_input_is_an_error() {
    let message = run_error("int a; begin input(a); end", "pony\n");
    assert!(message.contains("integer expected"), "got: {message}");
}

#[test]
fn exhausted_input_is_an_error() {
    let message = run_error("int a; begin input(a); end", "");
    assert!(message.contains("integer expected"), "got: {message}");
}

#[test]
fn undeclared_identifier_is_a_compile_error() {
    let message = run_error("int a; begin a = ghost; end", "");
    assert!(message.contains("Undeclared identifier 'ghost'"), "got: {message}");
}

#[test]
fn redeclaration_is_a_compile_error() {
    let message = run_error("int a; int a; begin end", "");
    assert!(message.contains("already declared"), "got: {message}");
}

#[test]
fn assigning_to_a_whole_array_is_a_compile_error() {
    let message = run_error("arr a[3]; begin a = 1; end", "");
    assert!(message.contains("must be indexed"), "got: {message}");
}

#[test]
fn indexing_a_scalar_is_a_compile_error() {
    let message = run_error("int a; begin a[0] = 1; end", "");
    assert!(message.contains("not an array"), "got: {message}");
}

#[test]
fn missing_semicolon_is_a_syntax_error() {
    let message = run_error("int a; begin a = 1 end", "");
    assert!(message.contains("Unexpected token"), "got: {message}");
}

#[test]
fn arithmetic_overflow_is_a_runtime_error() {
    let source = "int a; int i; begin a = 2; i = 0; while (i < 63) begin a = a * 2; i = i + 1; \
                  end ; end";
    let message = run_error(source, "");
    assert!(message.contains("overflow"), "got: {message}");
}
