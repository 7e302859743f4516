use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libtrivia_ownership::LineOrientedTriviaOwnership;
use libtrivia_ownership::syntax::SeparatedList;
use libtrivia_ownership::syntax::SyntaxToken;
use libtrivia_ownership::trivia::TriviaSequence;
use libtrivia_ownership::trivia::scan_trivia;

const LIST_SIZES: [usize; 3] = [8, 128, 2048];

/// Builds the trivia-bearing source of a multi-line argument list where every
/// item carries a same-line trailing comment and every fourth item is preceded
/// by an own-line comment.
fn synthetic_list_source(item_count: usize) -> String {
    let mut source = String::from("(\n");
    for index in 0..item_count {
        if index % 4 == 0 {
            source.push_str("    // group\n");
        }
        source.push_str(&format!("    arg_{index}"));
        if index + 1 < item_count {
            source.push_str(", /* note */ // trailing\n");
        } else {
            source.push('\n');
        }
    }
    source.push_str(") // end\n");
    source
}

struct SyntheticList {
    previous_token: SyntaxToken<'static>,
    list: SeparatedList<'static, SyntaxToken<'static>>,
    next_token: SyntaxToken<'static>,
}

fn synthetic_list(item_count: usize) -> SyntheticList {
    let items = (0..item_count)
        .map(|index| {
            let leading = if index % 4 == 0 {
                scan_trivia("    // group\n    ")
            } else {
                scan_trivia("    ")
            };
            SyntaxToken::with_trivia(leading, format!("arg_{index}"), TriviaSequence::new())
        })
        .collect();
    let separators = (1..item_count)
        .map(|_| {
            SyntaxToken::with_trivia(
                TriviaSequence::new(),
                ",",
                scan_trivia(" /* note */ // trailing\n"),
            )
        })
        .collect();

    let list = SeparatedList::new(items, separators)
        .expect("synthetic lists are well-formed");
    SyntheticList {
        previous_token: SyntaxToken::with_trivia(TriviaSequence::new(), "(", scan_trivia("\n")),
        list,
        next_token: SyntaxToken::with_trivia(
            scan_trivia("\n"),
            ")",
            scan_trivia(" // end\n"),
        ),
    }
}

// ─── Group 1: Trivia Scanning ─────────────────────────────

fn trivia_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("trivia_scan");

    for item_count in LIST_SIZES {
        let source = synthetic_list_source(item_count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &source,
            |b, source| b.iter(|| black_box(scan_trivia(source))),
        );
    }

    group.finish();
}

// ─── Group 2: Ownership Assignment ────────────────────────

fn ownership_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("ownership_assignment");
    let service = LineOrientedTriviaOwnership::new();

    for item_count in LIST_SIZES {
        let input = synthetic_list(item_count);
        group.throughput(Throughput::Elements(item_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(service.assign_trivia_ownership(
                        &input.previous_token,
                        &input.list,
                        &input.next_token,
                    ))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: List Item Removal ───────────────────────────

fn list_item_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_item_removal");
    let service = LineOrientedTriviaOwnership::new();

    for item_count in LIST_SIZES {
        let input = synthetic_list(item_count);
        for (label, index) in [("first", 0), ("middle", item_count / 2), ("last", item_count - 1)] {
            group.bench_with_input(
                BenchmarkId::new(label, item_count),
                &input,
                |b, input| {
                    b.iter(|| {
                        black_box(service.remove_list_item(
                            &input.previous_token,
                            &input.list,
                            &input.next_token,
                            index,
                        ))
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    trivia_scan,
    ownership_assignment,
    list_item_removal,
);
criterion_main!(benches);
