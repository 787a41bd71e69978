//! Encode/decode throughput benchmarks for DTO bodies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use servicefabric_client::core::{JsonRead, JsonReader};
use servicefabric_client::{
    BackupConfigurationInfo, Epoch, HealthState, Marshaller, PagedBackupConfigurationInfoList,
    PartitionBackupConfigurationInfo, ServiceBackupConfigurationInfo,
};
use uuid::Uuid;

fn configuration_page(items: usize) -> PagedBackupConfigurationInfoList {
    let items = (0..items)
        .map(|i| {
            if i % 2 == 0 {
                BackupConfigurationInfo::Service(ServiceBackupConfigurationInfo {
                    policy_name: Some(format!("policy-{i}")),
                    service_name: Some(format!("fabric:/App/Svc{i}")),
                    ..Default::default()
                })
            } else {
                BackupConfigurationInfo::Partition(PartitionBackupConfigurationInfo {
                    policy_name: Some(format!("policy-{i}")),
                    service_name: Some(format!("fabric:/App/Svc{i}")),
                    partition_id: Some(Uuid::from_u128(i as u128)),
                    ..Default::default()
                })
            }
        })
        .collect();
    PagedBackupConfigurationInfoList::new(items, Some("next".to_string()))
}

fn bench_scalars(c: &mut Criterion) {
    let marshaller = Marshaller::default();
    let mut group = c.benchmark_group("scalars");

    group.bench_function("enum_encode", |b| {
        b.iter(|| black_box(marshaller.encode(black_box(&HealthState::Warning)).unwrap()))
    });

    group.bench_function("enum_decode", |b| {
        b.iter(|| black_box(marshaller.decode::<HealthState>(black_box(br#""Warning""#)).unwrap()))
    });

    let epoch = br#"{"ConfigurationVersion":"8589934592","DataLossVersion":"131462452931584510"}"#;
    group.bench_function("flat_object_decode", |b| {
        b.iter(|| black_box(marshaller.decode::<Epoch>(black_box(epoch)).unwrap()))
    });

    group.finish();
}

fn bench_polymorphic_pages(c: &mut Criterion) {
    let marshaller = Marshaller::default();
    let mut group = c.benchmark_group("polymorphic_page");

    for size in [10usize, 100, 1000] {
        let page = configuration_page(size);
        let body = marshaller.encode(&page).unwrap();
        group.throughput(Throughput::Bytes(body.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &page, |b, page| {
            b.iter(|| black_box(marshaller.encode(page).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &body, |b, body| {
            b.iter(|| {
                black_box(
                    marshaller
                        .decode::<PagedBackupConfigurationInfoList>(body)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_skip_unknown(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_value");

    for width in [10usize, 1000] {
        let body = format!(
            "[{}]",
            (0..width)
                .map(|i| format!(r#"{{"K{i}":[{i},"v",null,true,{{"N":1.5}}]}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &body, |b, body| {
            b.iter(|| {
                let mut reader = JsonReader::from_str(body);
                reader.skip_value().unwrap();
                black_box(reader.finish().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalars,
    bench_polymorphic_pages,
    bench_skip_unknown,
);
criterion_main!(benches);
