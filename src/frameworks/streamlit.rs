//! Streamlit framework
//!
//! Streamlit apps are launched by file path rather than module import, so
//! descriptor construction additionally requires a located entrypoint.

use super::Framework;

pub struct Streamlit;

impl Framework for Streamlit {
    fn name(&self) -> &'static str {
        "Streamlit"
    }

    fn dependency(&self) -> &'static str {
        "streamlit"
    }

    fn port(&self) -> u16 {
        8501
    }

    fn needs_entrypoint(&self) -> bool {
        true
    }
}
