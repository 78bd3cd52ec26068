/// Port for a submission form.
///
/// Field values are read synchronously at submit time; a field the form does
/// not have reads as the empty string.
pub trait FormSource: Send {
    /// Current text of the named field.
    fn value(&self, field: &str) -> String;

    /// Clear every field back to empty.
    fn reset(&mut self);
}
