// Front-ends that drive the landing page. Only the terminal one for now.

pub mod terminal;
