use qlang::{Interpreter, get_result, get_result_with_input, run_source};

fn assert_output(source: &str, expected: &[&str]) {
    match get_result(source) {
        Ok(lines) => assert_eq!(lines, expected, "wrong output for:\n{source}"),
        Err(e) => panic!("program failed:\n{source}\nError: {e}"),
    }
}

fn assert_success(source: &str) {
    if let Err(e) = get_result(source) {
        panic!("program failed:\n{source}\nError: {e}");
    }
}

fn assert_failure(source: &str, expected_message: &str) {
    match get_result(source) {
        Ok(lines) => panic!("program unexpectedly succeeded:\n{source}\nOutput: {lines:?}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(expected_message),
                    "wrong diagnostic for:\n{source}\nGot: {message}");
        },
    }
}

#[test]
fn arithmetic_follows_precedence() {
    assert_output("ecrire 2 + 3 * 4", &["14"]);
    assert_output("ecrire (2 + 3) * 4", &["20"]);
    assert_output("ecrire 10 - 2 - 3", &["5"]);
    assert_output("ecrire 7 % 4", &["3"]);
}

#[test]
fn division_follows_ieee_semantics() {
    assert_output("ecrire 1 / 2", &["0.5"]);
    assert_output("ecrire 1 / 0", &["inf"]);
}

#[test]
fn glued_minus_negates_and_spaced_minus_subtracts() {
    assert_output("dec a = 5 ecrire -a", &["-5"]);
    assert_output("ecrire 10 - 3", &["7"]);
    assert_output("ecrire 2 * -3", &["-6"]);
}

#[test]
fn string_concatenation_coerces_either_side() {
    assert_output("ecrire \"n = \" + 4", &["n = 4"]);
    assert_output("ecrire 4 + \" fois\"", &["4 fois"]);
    assert_output("ecrire \"a\" + \"b\"", &["ab"]);
}

#[test]
fn values_render_in_french() {
    assert_output("ecrire rien", &["rien"]);
    assert_output("ecrire vrai", &["vrai"]);
    assert_output("ecrire faux", &["faux"]);
    assert_output("ecrire 3.0", &["3"]);
    assert_output("ecrire 2.5", &["2.5"]);
    assert_output("ecrire [1, \"a\", [2]]", &["[1, a, [2]]"]);
}

#[test]
fn declarations_without_initializer_hold_rien() {
    assert_output("dec x ecrire x", &["rien"]);
}

#[test]
fn redeclaring_in_the_same_scope_fails() {
    assert_failure("dec x = 1 dec x = 2", "Variable 'x' déjà déclarée");
}

#[test]
fn shadowing_masks_then_restores_the_outer_binding() {
    let source = "dec x = 1
                  si vrai alors
                      dec x = 2
                      ecrire x
                  fin
                  ecrire x";
    assert_output(source, &["2", "1"]);
}

#[test]
fn assignment_chains_right_associatively() {
    let source = "dec a dec b dec c dec d
                  a = b = c = d = 70
                  ecrire a + b + c + d";
    assert_output(source, &["280"]);
}

#[test]
fn conditional_branches_on_truthiness() {
    let source = "si 0 alors
                      ecrire \"non\"
                  sinonsi \"\" alors
                      ecrire \"non plus\"
                  sinon
                      ecrire \"oui\"
                  fin";
    assert_output(source, &["oui"]);
}

#[test]
fn arrays_and_functions_are_always_truthy() {
    assert_output("si [] alors ecrire \"oui\" fin", &["oui"]);
    assert_output("dec f = fonction () fin si f alors ecrire \"oui\" fin", &["oui"]);
}

#[test]
fn while_loop_counts_and_breaks() {
    let source = "dec i = 0
                  tantque vrai alors
                      si i == 3 alors
                          arreter
                      fin
                      ecrire i
                      i = i + 1
                  fin";
    assert_output(source, &["0", "1", "2"]);
}

#[test]
fn continue_skips_the_rest_of_the_iteration() {
    let source = "dec i = 0
                  tantque i < 5 alors
                      i = i + 1
                      si i % 2 == 0 alors
                          continuer
                      fin
                      ecrire i
                  fin";
    assert_output(source, &["1", "3", "5"]);
}

#[test]
fn loop_body_declarations_collide_across_iterations() {
    let source = "dec i = 0
                  tantque i < 2 alors
                      dec x = 1
                      i = i + 1
                  fin";
    assert_failure(source, "Variable 'x' déjà déclarée");
}

#[test]
fn for_loop_body_shares_one_scope() {
    assert_failure("pour i de 0 jusque 2 alors dec x = 1 fin",
                   "Variable 'x' déjà déclarée");
}

#[test]
fn for_loop_bound_is_inclusive() {
    assert_output("pour i de 0 jusque 5 alors ecrire i fin",
                  &["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn for_loop_honors_a_custom_step() {
    assert_output("pour i de 0 jusque 5 evol 2 alors ecrire i fin", &["0", "2", "4"]);
}

#[test]
fn for_loop_accepts_an_expression_bound() {
    assert_output("pour i de 5 jusque i >= 0 evol -2 alors ecrire i fin", &["5", "3", "1"]);
}

#[test]
fn for_loop_continue_still_steps() {
    let source = "pour i de 0 jusque 4 alors
                      si i == 2 alors
                          continuer
                      fin
                      ecrire i
                  fin";
    assert_output(source, &["0", "1", "3", "4"]);
}

#[test]
fn for_loop_reuses_an_outer_variable() {
    let source = "dec i = 99
                  pour i de 0 jusque 2 alors
                  fin
                  ecrire i";
    assert_output(source, &["3"]);
}

#[test]
fn named_functions_call_and_return() {
    let source = "fonction double (n)
                      retour n * 2
                  fin
                  ecrire double(21)";
    assert_output(source, &["42"]);
}

#[test]
fn return_unwinds_out_of_nested_loops() {
    let source = "fonction chercher ()
                      pour i de 0 jusque 9 alors
                          tantque vrai alors
                              retour i + 10
                          fin
                      fin
                      retour -1
                  fin
                  ecrire chercher()";
    assert_output(source, &["10"]);
}

#[test]
fn closures_capture_their_defining_frame() {
    let source = "fonction first (a)
                      retour fonction (b)
                          retour a * b
                      fin
                  fin
                  ecrire first(20)(30)";
    assert_output(source, &["600"]);
}

#[test]
fn functions_render_with_their_name() {
    let source = "fonction saluer () fin
                  ecrire saluer
                  ecrire fonction () fin
                  ecrire fonction () fin";
    assert_output(source, &["<fonction @saluer>", "<fonction @anon_1>", "<fonction @anon_2>"]);
}

#[test]
fn arrays_index_assign_and_append() {
    let source = "dec tab = [10, 20]
                  tab[1] = 30
                  tab[] = 40
                  ecrire tab[0] + tab[1] + tab[2]
                  ecrire tab";
    assert_output(source, &["80", "[10, 30, 40]"]);
}

#[test]
fn nested_arrays_share_identity() {
    let source = "dec inner = [20, 30]
                  dec tab = [10, inner]
                  tab[1][0] = 40
                  ecrire inner
                  ecrire tab";
    assert_output(source, &["[40, 30]", "[10, [40, 30]]"]);
}

#[test]
fn equality_on_arrays_is_identity() {
    let source = "dec a = [1]
                  dec b = [1]
                  dec c = a
                  ecrire a == b
                  ecrire a == c";
    assert_output(source, &["faux", "vrai"]);
}

#[test]
fn comparisons_cover_numbers_strings_and_truthiness() {
    assert_output("ecrire 2 < 10", &["vrai"]);
    assert_output("ecrire \"b\" > \"a\"", &["vrai"]);
    assert_output("ecrire \"10\" < \"9\"", &["vrai"]);
    assert_output("ecrire rien < vrai", &["vrai"]);
}

#[test]
fn logical_operators_short_circuit() {
    let source = "dec touche = faux
                  fonction effet ()
                      touche = vrai
                      retour vrai
                  fin
                  faux et effet()
                  ecrire touche
                  vrai ou effet()
                  ecrire touche";
    assert_output(source, &["faux", "faux"]);
}

#[test]
fn logical_operators_yield_booleans() {
    assert_output("ecrire 1 et \"a\"", &["vrai"]);
    assert_output("ecrire 0 ou \"\"", &["faux"]);
}

#[test]
fn lire_reads_queued_lines_then_rien() {
    let source = "ecrire lire \"nom ? \"
                  ecrire lire \"age ? \"
                  ecrire lire \"reste ? \"";
    match get_result_with_input(source, &["Alice", "30"]) {
        Ok(lines) => assert_eq!(lines, vec!["Alice", "30", "rien"]),
        Err(e) => panic!("program failed: {e}"),
    }
}

#[test]
fn taille_measures_strings_and_arrays() {
    assert_output("ecrire taille(\"héhé\")", &["4"]);
    assert_output("ecrire taille([1, 2, 3])", &["3"]);
    assert_output("ecrire taille(5)", &["0"]);
}

#[test]
fn interpreter_instances_are_isolated() {
    assert_output("ecrire fonction () fin", &["<fonction @anon_1>"]);
    // A fresh run starts the anonymous counter over.
    assert_output("ecrire fonction () fin", &["<fonction @anon_1>"]);
}

#[test]
fn arity_mismatch_is_reported() {
    let source = "fonction f (a, b) fin
                  f(1)";
    assert_failure(source, "Le nombre d'arguments attendu est de 2, mais 1 ont été fournis");
}

#[test]
fn arity_is_checked_before_arguments_run() {
    let source = "fonction bruit ()
                      ecrire \"bruit\"
                      retour 1
                  fin
                  fonction f (a, b) fin
                  f(bruit())";
    let mut interpreter = Interpreter::new();

    assert!(run_source(&mut interpreter, source).is_err());
    assert!(interpreter.output().lines().is_empty());
}

#[test]
fn calling_a_non_function_is_reported() {
    assert_failure("dec x = 5 x()", "Seulement les fonctions peuvent être appelées");
}

#[test]
fn out_of_bounds_index_is_reported() {
    assert_failure("dec t = [1, 2] ecrire t[2]",
                   "Index hors limite, l'index doit être compris entre 0 et 1");
    assert_failure("dec t = [1] ecrire t[0 - 1]",
                   "Index hors limite, l'index doit être compris entre 0 et 0");
}

#[test]
fn reading_without_an_index_is_reported() {
    assert_failure("dec t = [1] ecrire t[]", "Les tableaux doivent être indexés");
}

#[test]
fn non_numeric_indices_are_reported() {
    assert_failure("dec t = [1] ecrire t[\"a\"]",
                   "Seulement les nombres peuvent être utilisés comme index");
}

#[test]
fn indexing_a_non_array_is_reported() {
    assert_failure("ecrire 5[0]", "Seulement les tableaux peuvent être indexés");
    assert_failure("dec x = 5 x[0] = 1", "Seulement les tableaux peuvent être assignés");
}

#[test]
fn negating_a_non_number_is_reported() {
    assert_failure("ecrire -vrai", "Seulement les nombres peuvent être négatifs");
}

#[test]
fn assigning_to_a_non_target_is_reported() {
    assert_failure("1 = 2", "Impossible d'assigner une valeur à cette expression");
}

#[test]
fn undeclared_variables_are_reported() {
    assert_failure("ecrire inconnu", "Variable 'inconnu' non déclarée");
}

#[test]
fn string_operands_reject_non_concatenation_arithmetic() {
    assert_failure("ecrire \"a\" * 2",
                   "Seulement l'opérateur '+' peut être utilisé avec des chaînes de caractères");
}

#[test]
fn unterminated_strings_are_reported() {
    assert_failure("ecrire \"sans fin", "La chaîne n'est pas terminée");
}

#[test]
fn parameter_count_is_capped() {
    let params = (0..49).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");
    let source = format!("fonction large ({params}) fin");
    assert_failure(&source,
                   "La fonction 'large' ne peut pas avoir plus de 48 paramètres");
}

#[test]
fn top_level_return_stops_the_program() {
    let source = "ecrire 1
                  retour 2
                  ecrire 3";
    assert_output(source, &["1"]);
}

#[test]
fn fizzbuzz_runs_end_to_end() {
    let source = "pour i de 1 jusque 15 alors
                      si i % 15 == 0 alors
                          ecrire \"fizzbuzz\"
                      sinonsi i % 3 == 0 alors
                          ecrire \"fizz\"
                      sinonsi i % 5 == 0 alors
                          ecrire \"buzz\"
                      sinon
                          ecrire i
                      fin
                  fin";
    assert_output(source,
                  &["1", "2", "fizz", "4", "buzz", "fizz", "7", "8", "fizz", "buzz", "11",
                    "fizz", "13", "14", "fizzbuzz"]);
}

#[test]
fn comments_are_skipped() {
    let source = "rem un commentaire
                  ecrire 1 rem en fin de ligne
                  ecrire 2";
    assert_output(source, &["1", "2"]);
    assert_success("rem tout seul");
}
