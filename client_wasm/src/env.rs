//! Logging environment for the driver

/// Where the driver reports what happened
pub trait Environment {
    fn log(&self, msg: String);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

/// Browser console
#[cfg(target_arch = "wasm32")]
pub struct WasmEnv;

#[cfg(target_arch = "wasm32")]
impl Environment for WasmEnv {
    fn log(&self, msg: String) {
        console_log!("{}", msg);
    }
}

/// Standard output, for native builds and tests
#[cfg(not(target_arch = "wasm32"))]
pub struct StdoutEnv;

#[cfg(not(target_arch = "wasm32"))]
impl Environment for StdoutEnv {
    fn log(&self, msg: String) {
        println!("{msg}");
    }
}

pub fn default_env() -> Box<dyn Environment> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(WasmEnv)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(StdoutEnv)
    }
}
