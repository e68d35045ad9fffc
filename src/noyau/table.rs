// src/noyau/table.rs
//
// Table des opérateurs connus (symbole -> Op).
//
// Construite UNE fois (à la création du moteur), puis immuable :
// pas de singleton global, le moteur en est propriétaire.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::op::Op;

#[derive(Clone, Debug, Default)]
pub struct TableOperateurs {
    ops: HashMap<String, Op>,
}

impl TableOperateurs {
    /// Table vide (utile pour des tests ou une calculatrice réduite).
    pub fn vide() -> Self {
        Self::default()
    }

    /// Table standard : × ÷ + - √ sin cos tan π.
    ///
    /// Ordre des arguments binaires : f(premier_dépilé, second_dépilé).
    /// Donc ÷ et - retournent les opérandes : "10 2 ÷" => 10/2.
    pub fn standard() -> Self {
        let mut t = Self::vide();

        t.apprendre(Op::Binaire("×".into(), |a, b| a * b));
        t.apprendre(Op::Binaire("÷".into(), |a, b| b / a));
        t.apprendre(Op::Binaire("+".into(), |a, b| a + b));
        t.apprendre(Op::Binaire("-".into(), |a, b| b - a));

        t.apprendre(Op::Unaire("√".into(), f64::sqrt));
        t.apprendre(Op::Unaire("sin".into(), f64::sin));
        t.apprendre(Op::Unaire("cos".into(), f64::cos));
        t.apprendre(Op::Unaire("tan".into(), f64::tan));

        t.apprendre(Op::ConstanteOuVariable("π".into(), Some(PI)));

        t
    }

    /// Enregistre `op` sous son propre symbole (écrase l’existant).
    pub fn apprendre(&mut self, op: Op) {
        self.ops.insert(op.symbole(), op);
    }

    pub fn get(&self, symbole: &str) -> Option<&Op> {
        self.ops.get(symbole)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
