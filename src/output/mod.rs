mod report;

pub use report::{render, render_markdown, write_output};
