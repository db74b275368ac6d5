use serde::{Deserialize, Serialize};

/// One of the 16 two-input boolean functions of the abstract inputs A and B.
///
/// The discriminant is the function's truth table: bit `a + 2b` holds
/// `f(a, b)`. An unresolved value is represented as `Option::<BoolFn>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BoolFn {
    False = 0,
    Nor = 1,
    AAndNotB = 2,
    NotB = 3,
    BAndNotA = 4,
    NotA = 5,
    Xor = 6,
    Nand = 7,
    And = 8,
    Xnor = 9,
    A = 10,
    AOrNotB = 11,
    B = 12,
    BOrNotA = 13,
    Or = 14,
    True = 15,
}

impl BoolFn {
    /// All functions in truth-table order.
    pub const ALL: [BoolFn; 16] = [
        BoolFn::False,
        BoolFn::Nor,
        BoolFn::AAndNotB,
        BoolFn::NotB,
        BoolFn::BAndNotA,
        BoolFn::NotA,
        BoolFn::Xor,
        BoolFn::Nand,
        BoolFn::And,
        BoolFn::Xnor,
        BoolFn::A,
        BoolFn::AOrNotB,
        BoolFn::B,
        BoolFn::BOrNotA,
        BoolFn::Or,
        BoolFn::True,
    ];

    #[inline]
    #[must_use]
    pub const fn truth_table(self) -> u8 {
        self as u8
    }

    /// Looks up the function with the given 4-bit truth table. Higher bits are ignored.
    #[inline]
    #[must_use]
    pub const fn from_truth_table(bits: u8) -> Self {
        Self::ALL[(bits & 0xF) as usize]
    }

    /// Evaluates the function for concrete input values.
    #[must_use]
    pub fn eval(self, a: bool, b: bool) -> bool {
        let bit = u8::from(a) + 2 * u8::from(b);
        (self.truth_table() >> bit) & 1 == 1
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BoolFn::False => "FALSE",
            BoolFn::Nor => "NOR",
            BoolFn::AAndNotB => "A AND NOT B",
            BoolFn::NotB => "NOT B",
            BoolFn::BAndNotA => "B AND NOT A",
            BoolFn::NotA => "NOT A",
            BoolFn::Xor => "XOR",
            BoolFn::Nand => "NAND",
            BoolFn::And => "AND",
            BoolFn::Xnor => "XNOR",
            BoolFn::A => "A",
            BoolFn::AOrNotB => "A OR NOT B",
            BoolFn::B => "B",
            BoolFn::BOrNotA => "B OR NOT A",
            BoolFn::Or => "OR",
            BoolFn::True => "TRUE",
        }
    }
}

impl std::fmt::Display for BoolFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical input feeding one column of the input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputTap {
    A,
    B,
}

impl InputTap {
    /// The symbolic function this input contributes.
    #[must_use]
    pub fn function(self) -> BoolFn {
        match self {
            InputTap::A => BoolFn::A,
            InputTap::B => BoolFn::B,
        }
    }

    /// Picks the concrete signal for this input.
    #[must_use]
    pub fn signal(self, a: bool, b: bool) -> bool {
        match self {
            InputTap::A => a,
            InputTap::B => b,
        }
    }

    /// Parses `A`/`a` or `B`/`b`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(InputTap::A),
            'B' | 'b' => Some(InputTap::B),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table_order() {
        for (idx, f) in BoolFn::ALL.iter().enumerate() {
            assert_eq!(f.truth_table() as usize, idx);
            assert_eq!(BoolFn::from_truth_table(idx as u8), *f);
        }
    }

    #[test]
    fn test_eval_matches_names() {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(BoolFn::A.eval(a, b), a);
                assert_eq!(BoolFn::B.eval(a, b), b);
                assert_eq!(BoolFn::NotA.eval(a, b), !a);
                assert_eq!(BoolFn::NotB.eval(a, b), !b);
                assert_eq!(BoolFn::And.eval(a, b), a && b);
                assert_eq!(BoolFn::Nand.eval(a, b), !(a && b));
                assert_eq!(BoolFn::Or.eval(a, b), a || b);
                assert_eq!(BoolFn::Nor.eval(a, b), !(a || b));
                assert_eq!(BoolFn::Xor.eval(a, b), a ^ b);
                assert_eq!(BoolFn::Xnor.eval(a, b), a == b);
                assert_eq!(BoolFn::AAndNotB.eval(a, b), a && !b);
                assert_eq!(BoolFn::BAndNotA.eval(a, b), b && !a);
                assert_eq!(BoolFn::AOrNotB.eval(a, b), a || !b);
                assert_eq!(BoolFn::BOrNotA.eval(a, b), b || !a);
                assert!(!BoolFn::False.eval(a, b));
                assert!(BoolFn::True.eval(a, b));
            }
        }
    }

    #[test]
    fn test_input_tap() {
        assert_eq!(InputTap::A.function(), BoolFn::A);
        assert_eq!(InputTap::B.function(), BoolFn::B);
        assert!(InputTap::B.signal(false, true));
        assert_eq!(InputTap::from_char('b'), Some(InputTap::B));
        assert_eq!(InputTap::from_char('x'), None);
    }
}
