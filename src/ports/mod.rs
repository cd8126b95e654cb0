/// Ports module defining the interfaces the application core depends on
///
/// The pipeline use case only talks to the outside world (console, files,
/// output formats) through these traits.
pub mod outbound;
