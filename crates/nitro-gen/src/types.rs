//! The primitive type table.
//!
//! Declarations may only use these types; anything else is an invalid type
//! identifier. The byte size drives stack offset assignment.

/// Size in bytes of a primitive type, or `None` for an unknown identifier
pub fn primitive_size(type_name: &str) -> Option<usize> {
    match type_name {
        "i8" | "u8" => Some(1),
        "i16" | "u16" => Some(2),
        "i32" | "u32" => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(primitive_size("i8"), Some(1));
        assert_eq!(primitive_size("u8"), Some(1));
        assert_eq!(primitive_size("i16"), Some(2));
        assert_eq!(primitive_size("u16"), Some(2));
        assert_eq!(primitive_size("i32"), Some(4));
        assert_eq!(primitive_size("u32"), Some(4));
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(primitive_size("i64"), None);
        assert_eq!(primitive_size("f32"), None);
        assert_eq!(primitive_size("int"), None);
        assert_eq!(primitive_size(""), None);
    }
}
