//! Extraction benchmarks: controller pattern tables and annotation doc association.

use cataloger_analysis::extraction::annotation::{self, Language};
use cataloger_analysis::extraction::controller::{self, Framework};
use criterion::{criterion_group, criterion_main, Criterion};

fn express_source(routes: usize) -> String {
    let mut source = String::from("const express = require('express');\nconst router = express.Router();\n");
    for i in 0..routes {
        source.push_str(&format!("router.get('/api/items/{i}', handler{i});\n"));
        source.push_str(&format!("router.post('/api/items/{i}', create{i});\n"));
    }
    source
}

fn annotated_python(routes: usize) -> String {
    let mut source = String::from("class ItemApi:\n    \"\"\"Item endpoints.\"\"\"\n\n");
    for i in 0..routes {
        source.push_str(&format!(
            "    \"\"\"\n    Fetch item {i}.\n    @items\n    \"\"\"\n    @api.get('/items/{i}')\n    def item_{i}(self): ...\n\n"
        ));
    }
    source
}

fn controller_benchmark(c: &mut Criterion) {
    let source = express_source(200);
    c.bench_function("controller_express_400_routes", |b| {
        b.iter(|| {
            let framework = Framework::detect(std::hint::black_box(&source), "js");
            controller::extract_endpoints(&source, "js", framework)
        });
    });
}

fn annotation_benchmark(c: &mut Criterion) {
    let source = annotated_python(200);
    c.bench_function("annotation_python_200_routes", |b| {
        b.iter(|| annotation::extract_endpoints(std::hint::black_box(&source), "py", Language::Python));
    });
}

criterion_group!(benches, controller_benchmark, annotation_benchmark);
criterion_main!(benches);
