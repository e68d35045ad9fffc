// src/noyau/format.rs
//
// Affichage infixe de la pile, parenthésage minimal par précédence.

use super::op::{Op, Precedence};

/// Séparateur entre expressions complètes.
const SEPARATEUR: &str = ", ";

/// Marqueur d’opérande manquant.
const MANQUANT: &str = "?";

/// Décrit TOUTE la pile : chaque expression complète, la plus ancienne
/// d’abord, séparées par ", ".
///
/// Ex: [3, 4, ×, 5, +, 1, 2] => "3 × 4 + 5, 1, 2"
pub fn decrire(ops: &[Op]) -> String {
    let mut morceaux: Vec<String> = Vec::new();
    let mut reste = ops;

    while !reste.is_empty() {
        let (texte, suivant) = rendre(reste, Precedence::MIN);
        morceaux.push(texte);
        reste = suivant;
    }

    // rendus du sommet vers la base => on remet dans l’ordre d’entrée
    morceaux.reverse();
    morceaux.join(SEPARATEUR)
}

/// Rend l’expression au sommet de `ops` ; retourne (texte, reste).
///
/// `precedence_appelant` : précédence de l’opérateur englobant. Un binaire
/// moins prioritaire que son appelant est entouré de parenthèses.
pub fn rendre(ops: &[Op], precedence_appelant: Precedence) -> (String, &[Op]) {
    let Some((op, reste)) = ops.split_last() else {
        return (MANQUANT.to_string(), ops);
    };

    match op {
        Op::Operande(_) | Op::ConstanteOuVariable(_, _) => (op.symbole(), reste),

        Op::Unaire(symbole, _) => {
            let (dedans, reste1) = rendre(reste, op.precedence());
            (format!("{symbole}({dedans})"), reste1)
        }

        Op::Binaire(symbole, _) => {
            let p = op.precedence();

            // dépilé en premier = poussé en dernier = opérande de DROITE
            let (droite, reste1) = rendre(reste, p);
            let (gauche, reste2) = rendre(reste1, p);

            let texte = format!("{gauche} {symbole} {droite}");
            if p < precedence_appelant {
                (format!("({texte})"), reste2)
            } else {
                (texte, reste2)
            }
        }
    }
}
