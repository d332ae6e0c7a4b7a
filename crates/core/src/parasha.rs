//! Static registry of weekly Torah-reading periods.
//!
//! The weekly digest is tied to a parasha chosen by the admin. The annual
//! cycle is fixed, so the registry is a compile-time table rather than a
//! database entity. In weeks where two parshiot are read together the admin
//! simply picks whichever id to head the digest with.

use crate::types::DbId;

/// A weekly Torah-reading period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parasha {
    pub id: DbId,
    /// Short name, e.g. `"Noach"`.
    pub name: &'static str,
    /// Full label used in the digest heading, e.g. `"Parashat Noach"`.
    pub full_name: &'static str,
}

macro_rules! parasha {
    ($id:expr, $name:expr) => {
        Parasha {
            id: $id,
            name: $name,
            full_name: concat!("Parashat ", $name),
        }
    };
}

/// The annual cycle, in reading order. Ids are stable.
pub const PARASHIOT: &[Parasha] = &[
    parasha!(1, "Bereshit"),
    parasha!(2, "Noach"),
    parasha!(3, "Lech Lecha"),
    parasha!(4, "Vayera"),
    parasha!(5, "Chayei Sara"),
    parasha!(6, "Toldot"),
    parasha!(7, "Vayetzei"),
    parasha!(8, "Vayishlach"),
    parasha!(9, "Vayeshev"),
    parasha!(10, "Miketz"),
    parasha!(11, "Vayigash"),
    parasha!(12, "Vayechi"),
    parasha!(13, "Shemot"),
    parasha!(14, "Vaera"),
    parasha!(15, "Bo"),
    parasha!(16, "Beshalach"),
    parasha!(17, "Yitro"),
    parasha!(18, "Mishpatim"),
    parasha!(19, "Terumah"),
    parasha!(20, "Tetzaveh"),
    parasha!(21, "Ki Tisa"),
    parasha!(22, "Vayakhel"),
    parasha!(23, "Pekudei"),
    parasha!(24, "Vayikra"),
    parasha!(25, "Tzav"),
    parasha!(26, "Shmini"),
    parasha!(27, "Tazria"),
    parasha!(28, "Metzora"),
    parasha!(29, "Achrei Mot"),
    parasha!(30, "Kedoshim"),
    parasha!(31, "Emor"),
    parasha!(32, "Behar"),
    parasha!(33, "Bechukotai"),
    parasha!(34, "Bamidbar"),
    parasha!(35, "Nasso"),
    parasha!(36, "Beha'alotcha"),
    parasha!(37, "Sh'lach"),
    parasha!(38, "Korach"),
    parasha!(39, "Chukat"),
    parasha!(40, "Balak"),
    parasha!(41, "Pinchas"),
    parasha!(42, "Matot"),
    parasha!(43, "Masei"),
    parasha!(44, "Devarim"),
    parasha!(45, "Vaetchanan"),
    parasha!(46, "Eikev"),
    parasha!(47, "Re'eh"),
    parasha!(48, "Shoftim"),
    parasha!(49, "Ki Teitzei"),
    parasha!(50, "Ki Tavo"),
    parasha!(51, "Nitzavim"),
    parasha!(52, "Vayeilech"),
    parasha!(53, "Ha'azinu"),
    parasha!(54, "Vezot Haberakhah"),
];

/// Look up a parasha by id.
pub fn find(id: DbId) -> Option<&'static Parasha> {
    PARASHIOT.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_parasha() {
        let p = find(2).unwrap();
        assert_eq!(p.name, "Noach");
        assert_eq!(p.full_name, "Parashat Noach");
    }

    #[test]
    fn find_unknown_parasha_is_none() {
        assert!(find(0).is_none());
        assert!(find(55).is_none());
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        for (i, p) in PARASHIOT.iter().enumerate() {
            assert_eq!(p.id, i as DbId + 1);
        }
    }
}
