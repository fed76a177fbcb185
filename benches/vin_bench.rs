use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vinkit::{ManufacturerTable, Vin, decode};

const VINS: &[&str] = &[
    "JM1BL1SF3A1267720",
    "2A4GM684X6R632476",
    "2B3KA43G27H825762",
    "1FAHP3FN8AW139719",
    "1GKEV13728J123735",
];

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_5_vins", |b| {
        b.iter(|| {
            for vin in VINS {
                black_box(Vin::create(black_box(vin)).unwrap());
            }
        })
    });

    c.bench_function("reject_prohibited_letter", |b| {
        b.iter(|| black_box(decode(black_box("JM1BL1SF3A12677Q0"))))
    });
}

fn bench_details(c: &mut Criterion) {
    let vins: Vec<Vin> = VINS.iter().map(|v| Vin::create(v).unwrap()).collect();
    let table = ManufacturerTable::from_reader(
        "code,name\nJM1,Mazda\n2A4,Chrysler\n2B,Dodge\n1FA,Ford\n1GK,GMC\n".as_bytes(),
    )
    .unwrap();

    c.bench_function("details_5_vins", |b| {
        b.iter(|| {
            for vin in &vins {
                black_box(vin.details_in(&table));
            }
        })
    });
}

criterion_group!(benches, bench_create, bench_details);
criterion_main!(benches);
