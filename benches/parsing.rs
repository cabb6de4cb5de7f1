//! Performance benchmarks for changelog-html
//!
//! Run with: cargo bench

use changelog_html::{Options, render_fragment};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample changelogs of various sizes
mod samples {
    pub const SMALL: &str = "\
-- 0.868 2015-04-12 --
* [L#1433586] Fix a crash when opening the hub list
* Update OpenSSL to 1.0.2a
  (security fixes)

-- 0.867 2015-03-18 --
* [B#1234] Fixed a crash on startup
* Add a setting to hide the menu bar
";

    /// Generate a long changelog with one block per release
    pub fn large(releases: usize) -> String {
        let mut out = String::new();
        for release in (0..releases).rev() {
            out.push_str(&format!("-- 0.{release} 2015-04-12 --\n"));
            out.push_str("* [L#1433586] Fix a crash when opening the hub list\n");
            out.push_str("* [B#4821] Fixed <tags> & \"quotes\" in the chat window\n");
            out.push_str("* Rework the download queue\n  so that it survives restarts\n  and crashes\n");
            out.push_str("\nsomething the author forgot to bullet\n\n");
        }
        out
    }

    /// Lines that fall through every classifier but the last
    pub fn all_warnings(lines: usize) -> String {
        let mut out = String::from("-- 1.0 2021-01-15 --\n");
        for _ in 0..lines {
            out.push_str("a stray line with no bullet -- and a dash\n\n");
        }
        out
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let options = Options::default();

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| render_fragment(black_box(samples::SMALL), &options))
    });

    let large = samples::large(500);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| render_fragment(black_box(&large), &options))
    });

    let warnings = samples::all_warnings(2000);
    group.throughput(Throughput::Bytes(warnings.len() as u64));
    group.bench_function("all_warnings", |b| {
        b.iter(|| render_fragment(black_box(&warnings), &options))
    });

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    // Plain text (no escaping needed)
    let plain = "Hello, this is plain text without any special characters. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(plain.len());
            changelog_html::escape::escape_text_into(&mut out, black_box(&plain));
            out
        })
    });

    // Text with HTML that needs escaping
    let html_heavy = "<script>alert('xss')</script> & more <tags> here! ".repeat(100);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("html_heavy", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(html_heavy.len() * 2);
            changelog_html::escape::escape_text_into(&mut out, black_box(&html_heavy));
            out
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_escaping);
criterion_main!(benches);
