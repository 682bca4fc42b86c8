use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use phpantom_inline_var::ScanStrategy;
use phpantom_inline_var::docblock::extract_var_annotations;
use phpantom_inline_var::scanner::scan_comments;

/// A class body with `methods` methods, each carrying a docblock and an
/// inline `@var` annotation.
fn synthetic_source(methods: usize) -> String {
    let mut src = String::from("<?php\nnamespace App;\n\nuse Vendor\\Thing;\n\nclass Big\n{\n");
    for i in 0..methods {
        src.push_str(&format!(
            "    /**\n     * Method {i}.\n     * @return void\n     */\n    public function m{i}()\n    {{\n        // set up\n        /** @var Thing|int[]|\\App\\Other{i} $v{i} */\n        $v{i} = make('/** not a comment */');\n    }}\n\n"
        ));
    }
    src.push_str("}\n");
    src
}

fn bench_scan(c: &mut Criterion) {
    let source = synthetic_source(500);

    for (name, strategy) in [
        ("tokenizer", ScanStrategy::Tokenizer),
        ("whole_file", ScanStrategy::WholeFile),
    ] {
        c.bench_function(&format!("scan_and_extract/{name}"), |b| {
            b.iter(|| {
                let mut found = 0;
                for comment in scan_comments(black_box(&source), strategy, 1) {
                    found += extract_var_annotations(comment.text, comment.line).len();
                }
                found
            })
        });
    }
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
