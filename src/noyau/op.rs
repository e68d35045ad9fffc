// src/noyau/op.rs
//
// Entrée de pile (Op) + classe de précédence (affichage seulement).

use super::nombre::format_valeur;

/// Classe de précédence utilisée UNIQUEMENT par le formatteur.
///
/// Ordre : Unaire < Addition < Multiplication < Atome.
/// - Unaire : fournit ses propres parenthèses, jamais enveloppé
/// - Atome  : opérandes, constantes, variables (jamais de parenthèses)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Unaire,
    Addition,
    Multiplication,
    Atome,
}

impl Precedence {
    /// Précédence “appelant” initiale (la plus basse).
    pub const MIN: Precedence = Precedence::Unaire;
}

/// Une entrée de la pile : opérande, opérateur, constante ou variable.
///
/// Immuable une fois créée. Les opérations portent un pointeur de fonction
/// d’arité fixe ; le comportement (symbole, précédence, évaluation) se fait
/// par `match` exhaustif.
#[derive(Clone, Debug)]
pub enum Op {
    Operande(f64),
    Unaire(String, fn(f64) -> f64),
    /// f(premier_dépilé, second_dépilé)
    Binaire(String, fn(f64, f64) -> f64),
    /// Some => constante ; None => variable (résolue à l’évaluation)
    ConstanteOuVariable(String, Option<f64>),
}

impl Op {
    /// Symbole d’affichage (sert aussi à la représentation “programme”).
    pub fn symbole(&self) -> String {
        match self {
            Op::Operande(v) => format_valeur(*v),
            Op::Unaire(s, _) | Op::Binaire(s, _) | Op::ConstanteOuVariable(s, _) => s.clone(),
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Op::Operande(_) | Op::ConstanteOuVariable(_, _) => Precedence::Atome,
            Op::Unaire(_, _) => Precedence::Unaire,
            Op::Binaire(s, _) => match s.as_str() {
                "+" | "-" => Precedence::Addition,
                _ => Precedence::Multiplication,
            },
        }
    }

    /// Variable = constante/variable SANS valeur fixe.
    pub fn est_variable(&self) -> bool {
        matches!(self, Op::ConstanteOuVariable(_, None))
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbole())
    }
}
