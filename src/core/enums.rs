use crate::domain::ports::EnumSet;

/// True when some member's canonical form equals `value` exactly.
pub fn is_in_enum<E: EnumSet>(value: &str) -> bool {
    E::VARIANTS.iter().any(|variant| variant.canonical() == value)
}

/// Case-insensitive substring search over the canonical forms.
pub fn includes_in_enum<E: EnumSet>(value: &str) -> bool {
    let needle = value.to_lowercase();
    E::VARIANTS
        .iter()
        .any(|variant| variant.canonical().to_lowercase().contains(&needle))
}

/// Compares canonical forms against the decimal rendering of `value`.
pub fn is_int_in_enum<E: EnumSet>(value: i32) -> bool {
    is_in_enum::<E>(&value.to_string())
}

/// Identity check: true when `value` is one of the declared members.
pub fn is_variant_in_enum<E: EnumSet>(value: Option<E>) -> bool {
    value.is_some_and(|candidate| E::VARIANTS.contains(&candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl EnumSet for Color {
        const VARIANTS: &'static [Self] = &[Color::Red, Color::Green, Color::Blue];

        fn canonical(&self) -> &'static str {
            match self {
                Color::Red => "RED",
                Color::Green => "GREEN",
                Color::Blue => "BLUE",
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum HttpStatus {
        Ok,
        NotFound,
    }

    impl EnumSet for HttpStatus {
        const VARIANTS: &'static [Self] = &[HttpStatus::Ok, HttpStatus::NotFound];

        fn canonical(&self) -> &'static str {
            match self {
                HttpStatus::Ok => "200",
                HttpStatus::NotFound => "404",
            }
        }
    }

    #[test]
    fn test_is_in_enum_is_case_sensitive() {
        assert!(is_in_enum::<Color>("RED"));
        assert!(!is_in_enum::<Color>("red"));
        assert!(!is_in_enum::<Color>(""));
    }

    #[test]
    fn test_includes_in_enum() {
        assert!(includes_in_enum::<Color>("re"));
        assert!(includes_in_enum::<Color>("LU"));
        assert!(includes_in_enum::<Color>(""));
        assert!(!includes_in_enum::<Color>("purple"));
    }

    #[test]
    fn test_is_int_in_enum() {
        assert!(is_int_in_enum::<HttpStatus>(404));
        assert!(!is_int_in_enum::<HttpStatus>(500));
        assert!(!is_int_in_enum::<Color>(0));
    }

    #[test]
    fn test_is_variant_in_enum() {
        assert!(is_variant_in_enum(Some(Color::Blue)));
        assert!(!is_variant_in_enum::<Color>(None));
    }

    #[test]
    fn test_ordinal_follows_declaration_order() {
        assert_eq!(Color::Red.ordinal(), Some(0));
        assert_eq!(Color::Blue.ordinal(), Some(2));
        assert_eq!(HttpStatus::NotFound.ordinal(), Some(1));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shape {
        Circle,
        Square,
        Retired,
    }

    impl EnumSet for Shape {
        const VARIANTS: &'static [Self] = &[Shape::Circle, Shape::Square];

        fn canonical(&self) -> &'static str {
            match self {
                Shape::Circle => "circle",
                Shape::Square => "square",
                Shape::Retired => "retired",
            }
        }
    }

    #[test]
    fn test_unregistered_member_has_no_ordinal() {
        assert_eq!(Shape::Square.ordinal(), Some(1));
        assert_eq!(Shape::Retired.ordinal(), None);
        assert!(!is_variant_in_enum(Some(Shape::Retired)));
        assert!(!is_in_enum::<Shape>("retired"));
    }
}
