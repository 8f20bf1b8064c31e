//! Guardas de conversión numérica.
//!
//! Equivalente a las conversiones protegidas del material original: el
//! texto externo nunca se convierte sin pasar por aquí, y el fallo es un
//! `DomainError::NotNumeric` recuperable (nunca un panic).

use crate::errors::DomainError;

/// Convierte texto externo a entero. El texto se recorta antes de parsear.
pub fn parse_int(text: &str) -> Result<i64, DomainError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| DomainError::NotNumeric {
        input: text.to_string(),
        expected: "número entero".to_string(),
    })
}

/// Convierte texto externo a flotante.
pub fn parse_float(text: &str) -> Result<f64, DomainError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| DomainError::NotNumeric {
        input: text.to_string(),
        expected: "número decimal".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_acepta_espacios() {
        assert_eq!(parse_int(" 42 \n"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
    }

    #[test]
    fn parse_int_rechaza_texto() {
        let err = parse_int("abc").unwrap_err();
        assert!(matches!(err, DomainError::NotNumeric { ref input, .. } if input == "abc"));
    }

    #[test]
    fn parse_float_basico() {
        assert_eq!(parse_float("2.5"), Ok(2.5));
        assert!(parse_float("dos").is_err());
    }
}
