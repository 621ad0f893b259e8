//! Flask framework (WSGI)

use super::Framework;

pub struct Flask;

impl Framework for Flask {
    fn name(&self) -> &'static str {
        "Flask"
    }

    fn dependency(&self) -> &'static str {
        "flask"
    }

    fn port(&self) -> u16 {
        8080
    }
}
