// Normalización y validación de entradas de formulario

/// Trim + minúsculas; el host identifica a los usuarios por email en minúsculas
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lee la duración del alquiler escrita en el prompt.
///
/// La entrada vale si es un número finito y estrictamente positivo (con
/// espacios alrededor, decimales o exponente). Los días enviados son los
/// dígitos iniciales tras el signo opcional: "2.9" -> 2, "1e1" -> 1,
/// "0.5" -> 0. Sin dígitos iniciales (".5") no hay nada que enviar.
pub fn parse_rental_days(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}
