//! Noyau — évaluation récursive de la pile
//!
//! On consomme la pile par la FIN (sommet = dernière entrée poussée) et on
//! retourne (résultat optionnel, reste non consommé).
//!
//! Contrat d’échec : aucune exception, aucun code d’erreur. Un échec = `None`,
//! propagé vers l’opérateur englobant. Le reste retourné en cas d’échec est
//! l’entrée REÇUE par l’appel qui échoue (pas la version partiellement
//! consommée) : comportement historique, conservé tel quel.

use std::collections::HashMap;

use super::op::Op;

/// Table des variables : nom -> valeur optionnelle.
/// - nom absent            => jamais affecté
/// - nom présent avec None => affecté puis effacé
pub type Variables = HashMap<String, Option<f64>>;

/// Évalue l’expression au sommet de `ops`.
///
/// Retourne (résultat, reste). `ops` n’est jamais modifié.
pub fn evaluer<'a>(ops: &'a [Op], variables: &Variables) -> (Option<f64>, &'a [Op]) {
    let Some((op, reste)) = ops.split_last() else {
        return (None, ops);
    };

    match op {
        Op::Operande(v) => return (Some(*v), reste),

        Op::Unaire(_, f) => {
            if let (Some(x), reste1) = evaluer(reste, variables) {
                return (Some(f(x)), reste1);
            }
        }

        Op::Binaire(_, f) => {
            // premier dépilé = poussé le plus récemment
            if let (Some(premier), reste1) = evaluer(reste, variables) {
                if let (Some(second), reste2) = evaluer(reste1, variables) {
                    return (Some(f(premier, second)), reste2);
                }
            }
        }

        Op::ConstanteOuVariable(_, Some(v)) => return (Some(*v), reste),

        Op::ConstanteOuVariable(nom, None) => {
            // présent (même None) => valeur stockée ; absent => échec
            if let Some(stockee) = variables.get(nom) {
                return (*stockee, reste);
            }
        }
    }

    (None, ops)
}

/// Résultat seul (reste ignoré).
pub fn evaluer_sommet(ops: &[Op], variables: &Variables) -> Option<f64> {
    evaluer(ops, variables).0
}
