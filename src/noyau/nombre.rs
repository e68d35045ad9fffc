// src/noyau/nombre.rs
//
// Affichage des valeurs f64 (programme, formatteur, écran).
//
// Règle unique :
// - partie fractionnaire nulle ET dans la plage i64 => entier, sans point ("7")
// - sinon => précision complète, représentation la plus courte qui relit
//   la même valeur ("2.5", "0.30000000000000004", "1e300", "inf", "NaN")

use num_traits::ToPrimitive;

/// Formate une valeur selon la règle “entier si possible”.
pub fn format_valeur(v: f64) -> String {
    if let Some(n) = comme_entier(v) {
        return format!("{n}");
    }
    format!("{v:?}")
}

/// Some(n) si `v` est entière et tient dans un i64 natif.
fn comme_entier(v: f64) -> Option<i64> {
    // NaN / ±inf : fract() == NaN => jamais entier
    if v.fract() != 0.0 {
        return None;
    }
    v.to_i64()
}

/// Relit un symbole numérique (inverse de `format_valeur` pour les finis).
///
/// Au moins un chiffre exigé : "inf", "nan", "infinity" restent des noms
/// (variables), jamais des nombres.
pub fn lire_valeur(s: &str) -> Option<f64> {
    let t = s.trim();
    if !t.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse::<f64>().ok()
}
