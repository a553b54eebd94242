use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ramanplate::multiwell::{MultiwellExport, PlateTag};
use ramanplate::ordering::{order_files, LabelOptions};
use ramanplate::writer::{WellFileWriter, WriterConfig};

/// Build a full 96-well export with `points` shifts per spectrum.
fn generate_export(points: usize) -> String {
    let mut text = String::from("#Acquired=01.01.2024 00:00\n#Objective=x50\n");

    let axis: Vec<String> = (0..points)
        .map(|i| format!("{:.4}", 200.0 + i as f64 * 0.5))
        .collect();
    text.push_str(&axis.join("\t"));
    text.push('\n');

    for col in 1..=8 {
        for row in 1..=12 {
            text.push_str(&format!("{col}\t{row}"));
            for i in 0..points {
                let value = 1000.0 + ((i * col * row) % 97) as f64;
                text.push_str(&format!("\t{value:.3}"));
            }
            text.push('\n');
        }
    }
    text
}

fn bench_parse_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiwell_parse");

    for points in [500, 1000, 2000] {
        let text = generate_export(points);

        group.throughput(Throughput::Elements((96 * points) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &text, |b, text| {
            b.iter(|| {
                let export = MultiwellExport::parse_str(black_box(text)).unwrap();
                black_box(export.well_count());
            });
        });
    }

    group.finish();
}

fn bench_write_wells(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiwell_write_wells");

    for points in [500, 1000] {
        let export = MultiwellExport::parse_str(&generate_export(points)).unwrap();
        let tag = PlateTag::new(2, Some(60));

        group.throughput(Throughput::Elements((96 * points) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &export, |b, export| {
            let dir = tempfile::tempdir().unwrap();
            let writer = WellFileWriter::new(dir.path(), WriterConfig::default()).unwrap();
            b.iter(|| {
                let stats = writer.write_export(export, &tag).unwrap();
                black_box(stats.files_written);
            });
        });
    }

    group.finish();
}

fn bench_order_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_files");

    for plates in [1u32, 4, 16] {
        let mut files: Vec<String> = Vec::new();
        for plate in (1..=plates).rev() {
            for row in ['H', 'D', 'A', 'C', 'B', 'G', 'E', 'F'] {
                for column in (1..=12).rev() {
                    files.push(format!("plate{plate}_60mgml_{row}{column}.txt"));
                    files.push(format!("plate{plate}_60mgml_{row}{column}_edge.txt"));
                }
            }
        }
        files.push("glass_reference.txt".to_string());

        group.throughput(Throughput::Elements(files.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(plates), &files, |b, files| {
            b.iter(|| {
                let ordered = order_files(black_box(files), LabelOptions::default()).unwrap();
                black_box(ordered.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_export, bench_write_wells, bench_order_files);
criterion_main!(benches);
