use std::sync::atomic::{AtomicBool, Ordering};

/// Open/close capability granted to the controller by whatever UI hosts the
/// calculator modal. The host owns the flag; the controller only asks.
pub trait ModalHost: Send + Sync {
    fn is_open(&self) -> bool;
    fn open(&self);
    fn close(&self);
}

/// Flag-backed host for front ends without their own modal state.
#[derive(Debug)]
pub struct ModalFlag {
    open: AtomicBool,
}

impl ModalFlag {
    pub fn new(open: bool) -> Self {
        Self {
            open: AtomicBool::new(open),
        }
    }
}

impl Default for ModalFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ModalHost for ModalFlag {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}
