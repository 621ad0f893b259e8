//! FastAPI framework (ASGI)

use super::Framework;

pub struct FastApi;

impl Framework for FastApi {
    fn name(&self) -> &'static str {
        "FastAPI"
    }

    fn dependency(&self) -> &'static str {
        "fastapi"
    }

    fn port(&self) -> u16 {
        8000
    }
}
