/// Sustituye cada carácter no ASCII por `-`.
///
/// Se aplica al texto libre del host antes de llegar a la tabla. No es un
/// escape HTML: `<`, `>`, `&` y las comillas pasan sin cambios.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '-' })
        .collect()
}
