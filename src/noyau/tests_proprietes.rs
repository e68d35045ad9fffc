//! Tests de propriétés : comportement observable du moteur, de bout en bout.
//!
//! Chaque test part d’un moteur neuf et ne passe que par l’API publique
//! (push / opérateurs / variables / clear / programme / description).

use super::nombre::format_valeur;
use super::table::TableOperateurs;
use super::Moteur;

/// Pousse une suite de symboles : nombre => push_number, opérateur connu =>
/// apply_operator, sinon => push_symbol. Retourne le dernier résultat.
fn saisir(m: &mut Moteur, symboles: &[&str]) -> Option<f64> {
    let table = TableOperateurs::standard();
    let mut r = None;
    for s in symboles {
        r = if let Ok(v) = s.parse::<f64>() {
            m.push_number(v)
        } else if table.get(s).is_some() && *s != "π" {
            m.apply_operator(s)
        } else {
            m.push_symbol(s)
        };
    }
    r
}

#[test]
fn prop_postfixe_complet() {
    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["3", "4", "+"]), Some(7.0));
    assert_eq!(m.evaluate(), Some(7.0));

    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["2", "3", "4", "×", "+"]), Some(14.0));
}

#[test]
fn prop_operandes_manquants_idempotent() {
    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["5", "+"]), None);
    let avant = m.programme();

    // observer ne change rien
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.programme(), avant);

    // la pile reste constructible : "5 + 2 ×" => (? + 5) × 2 : toujours None
    assert_eq!(saisir(&mut m, &["2", "×"]), None);
    assert_eq!(m.description(), "(? + 5) × 2");
}

#[test]
fn prop_ordre_division_soustraction() {
    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["10", "2", "÷"]), Some(5.0));

    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["10", "2", "-"]), Some(8.0));
}

#[test]
fn prop_liaison_tardive_variable() {
    let mut m = Moteur::new();
    assert_eq!(saisir(&mut m, &["x", "5", "+"]), None);
    assert_eq!(m.set_variable("x", Some(3.0)), Some(8.0));
    assert_eq!(m.evaluate(), Some(8.0));

    // effacer la variable => de nouveau None
    assert_eq!(m.set_variable("x", None), None);
}

#[test]
fn prop_programme_aller_retour() {
    let mut m = Moteur::new();
    saisir(&mut m, &["3", "4.5", "×", "π", "√", "+", "7"]);
    let p = m.programme();

    let mut neuf = Moteur::new();
    neuf.charger_programme(&p);
    assert_eq!(neuf.programme(), p);
    assert_eq!(neuf.description(), m.description());
    assert_eq!(neuf.evaluate(), m.evaluate());
}

#[test]
fn prop_programme_variables_abandonnees() {
    let mut m = Moteur::new();
    saisir(&mut m, &["x", "5", "+"]);
    let p = m.programme();
    assert_eq!(p.0, ["x", "5", "+"]);

    let mut neuf = Moteur::new();
    neuf.charger_programme(&p);
    assert_eq!(neuf.programme().0, ["5", "+"]);
}

#[test]
fn prop_programme_variables_non_finies_restent_absentes() {
    let mut m = Moteur::new();
    m.push_symbol("inf");
    assert_eq!(m.push_symbol("nan"), None);

    let mut neuf = Moteur::new();
    assert_eq!(neuf.charger_programme(&m.programme()), None);
    assert_eq!(neuf.description(), "");
}

#[test]
fn prop_programme_json() {
    let mut m = Moteur::new();
    saisir(&mut m, &["1", "2", "+", "cos"]);
    let j = m.programme().vers_json().unwrap();

    let mut neuf = Moteur::new();
    let p = super::Programme::depuis_json(&j).unwrap();
    assert_eq!(neuf.charger_programme(&p), Some(3.0_f64.cos()));
}

#[test]
fn prop_affichage_parentheses() {
    let mut m = Moteur::new();
    saisir(&mut m, &["3", "4", "×", "5", "+"]);
    assert_eq!(m.description(), "3 × 4 + 5");

    let mut m = Moteur::new();
    saisir(&mut m, &["3", "4", "+", "5", "×"]);
    assert_eq!(m.description(), "(3 + 4) × 5");
}

#[test]
fn prop_historique_complet() {
    let mut m = Moteur::new();
    saisir(&mut m, &["3", "5", "+", "π", "cos", "2"]);
    assert_eq!(m.description(), "3 + 5, cos(π), 2");
}

#[test]
fn prop_affichage_valeurs() {
    let mut m = Moteur::new();
    let sept = saisir(&mut m, &["3", "4", "+"]).unwrap();
    assert_eq!(format_valeur(sept), "7");

    let mut m = Moteur::new();
    let r = saisir(&mut m, &["10", "4", "÷"]).unwrap();
    assert_eq!(format_valeur(r), "2.5");
}

#[test]
fn prop_clear_total() {
    let mut m = Moteur::new();
    saisir(&mut m, &["x", "1", "+"]);
    assert_eq!(m.set_variable("x", Some(1.0)), Some(2.0));

    m.clear();
    assert_eq!(m.evaluate(), None);
    assert_eq!(m.description(), "");
    assert_eq!(m.variable("x"), None);

    // plus aucune variable résolvable
    assert_eq!(m.push_symbol("x"), None);
}

#[test]
fn prop_pile_jamais_modifiee_par_lecture() {
    let mut m = Moteur::new();
    saisir(&mut m, &["1", "√", "2", "+", "+"]);
    let avant = m.programme();
    let _ = m.evaluate();
    let _ = m.description();
    assert_eq!(m.programme(), avant);
}
