pub enum Msg {
    /// A form input changed: `(name, value)` as reported by the input.
    FieldChanged { name: String, value: String },
    /// The form was submitted; default browser submission already prevented.
    Submit,
    SaveSucceeded,
    SaveFailed(String),
}
