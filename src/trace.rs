use std::cell::RefCell;

// Define a struct to hold the flags
#[derive(Debug, Default, Clone, Copy)]
pub struct Flags {
    pub v_option: bool,
    pub q_option: bool,
}

// Define a thread-local variable to hold the flags
thread_local!(pub(crate) static TFLAGS: RefCell<Flags> = RefCell::new(Flags::default()));

pub fn set_flags(flags: Flags) {
    TFLAGS.with(|tflags| {
        *tflags.borrow_mut() = flags;
    });
}

// prints every head movement
macro_rules! v_trace {
    ($($arg:tt)*) => {
        $crate::trace::TFLAGS.with(|tflags| {
            let tflags = tflags.borrow();
            if tflags.v_option {
                println!("{}", format_args!($($arg)*));
            }
        });
    };
}

// prints the queue
macro_rules! q_trace {
    ($($arg:tt)*) => {
        $crate::trace::TFLAGS.with(|tflags| {
            let tflags = tflags.borrow();
            if tflags.q_option {
                println!("{}", format_args!($($arg)*));
            }
        });
    };
}

pub(crate) use q_trace;
pub(crate) use v_trace;
