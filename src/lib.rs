// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod core {
    pub mod forum;
    pub mod generators;
    pub mod ports;
}

pub mod adapters {
    pub mod in_memory {
        pub mod fixtures;
        pub mod in_memory_forum_store;
    }
    pub mod system_clock;
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
