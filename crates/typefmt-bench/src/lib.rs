//! Shared inputs for the typefmt benchmarks.

use typefmt_core::Arg;

/// A named template with arguments that render successfully.
pub struct Workload {
    pub name: &'static str,
    pub template: &'static str,
    pub args: Vec<Arg<'static>>,
}

/// Representative templates, from trivial to directive-heavy.
#[must_use]
pub fn workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "literal_only",
            template: "the quick brown fox jumps over the lazy dog",
            args: Vec::new(),
        },
        Workload {
            name: "single_int",
            template: "%d",
            args: vec![Arg::Int(-1_234_567)],
        },
        Workload {
            name: "padded_mix",
            template: "d=[%012d] o=[%o] b=[%08b] s=[%7s] f=[%-8.2f] x=[%04x]",
            args: vec![
                Arg::Int(-123),
                Arg::Int(511),
                Arg::Int(127),
                Arg::Text("hello"),
                Arg::Float(-123.123),
                Arg::Int(255),
            ],
        },
        Workload {
            name: "log_line",
            template: "%s [%-5s] %s:%u %c %p took %.3fms (%d%%)",
            args: vec![
                Arg::Text("2026-10-19T12:00:00Z"),
                Arg::Text("info"),
                Arg::Text("server.rs"),
                Arg::Uint(418),
                Arg::Uint(0x2713),
                Arg::Address(0x7fff_5fbf_f8a0),
                Arg::Float(12.3456),
                Arg::Int(87),
            ],
        },
        Workload {
            name: "escapes",
            template: "%%%%%% %d%% %%%%",
            args: vec![Arg::Int(50)],
        },
    ]
}
