//! Tests fuzz safe : robustesse + déterminisme sur des piles aléatoires.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de pile bornée
//! - budget temps global
//! - invariants : évaluer/décrire ne paniquent pas, ne modifient pas la pile,
//!   sont déterministes ; le programme se relit à l’identique (sans variables)

use std::time::{Duration, Instant};

use super::Moteur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const OPERATEURS: [&str; 8] = ["×", "÷", "+", "-", "√", "sin", "cos", "tan"];

/// Une action aléatoire sur le moteur. `avec_variables` autorise x/y.
fn action(m: &mut Moteur, rng: &mut Rng, avec_variables: bool) {
    match rng.pick(if avec_variables { 5 } else { 4 }) {
        0 | 1 => {
            let v = rng.pick(200) as f64 / 4.0 - 10.0;
            m.push_number(v);
        }
        2 => {
            let s = OPERATEURS[rng.pick(OPERATEURS.len() as u32) as usize];
            m.apply_operator(s);
        }
        3 => {
            m.push_symbol("π");
        }
        _ => {
            let nom = if rng.pick(2) == 0 { "x" } else { "y" };
            m.push_symbol(nom);
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_lectures_pures_et_deterministes() {
    let t0 = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        budget(t0, Duration::from_secs(5));

        let mut m = Moteur::new();
        let n = 1 + rng.pick(40);
        for _ in 0..n {
            action(&mut m, &mut rng, true);
        }

        let avant = m.programme();
        let r1 = m.evaluate();
        let d1 = m.description();
        let r2 = m.evaluate();
        let d2 = m.description();

        assert_eq!(m.programme(), avant);
        assert_eq!(d1, d2);
        // NaN != NaN : on compare les bits
        assert_eq!(r1.map(f64::to_bits), r2.map(f64::to_bits));
        assert!(!d1.is_empty());
    }
}

#[test]
fn fuzz_programme_relu_sans_variables() {
    let t0 = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        budget(t0, Duration::from_secs(5));

        let mut m = Moteur::new();
        let n = 1 + rng.pick(30);
        for _ in 0..n {
            action(&mut m, &mut rng, false);
        }

        let p = m.programme();
        let mut neuf = Moteur::new();
        let r = neuf.charger_programme(&p);

        assert_eq!(neuf.programme(), p);
        assert_eq!(neuf.description(), m.description());
        assert_eq!(r.map(f64::to_bits), m.evaluate().map(f64::to_bits));
    }
}

#[test]
fn fuzz_pile_longue_safe() {
    // profondeur de récursion bornée par la taille de pile : on reste raisonnable
    let t0 = Instant::now();
    let mut m = Moteur::new();
    m.push_number(1.0);
    for _ in 0..500 {
        m.push_number(1.0);
        m.apply_operator("+");
    }
    budget(t0, Duration::from_secs(5));

    assert_eq!(m.evaluate(), Some(501.0));
    let d = m.description();
    assert!(d.starts_with("1 + 1 + 1"));
    assert_eq!(d.matches('+').count(), 500);
    assert!(!d.contains('('));
}
