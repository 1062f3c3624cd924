// Output formatting — terminal display for the CLI path.

pub mod terminal;
