use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, create_piece, rotate, sweep_completed_rows, FieldSession, Matrix};
use blockfall::types::{PieceKind, Position, RotationDirection};

fn bench_advance_time(c: &mut Criterion) {
    let mut session = FieldSession::new(12, 20, 12345);

    c.bench_function("advance_time_16ms", |b| {
        b.iter(|| {
            session.advance_time(black_box(16));
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    let mut session = FieldSession::new(12, 20, 12345);

    c.bench_function("drop", |b| {
        b.iter(|| {
            black_box(session.drop());
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut grid = Matrix::new(12, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..12 {
                    grid.set(x, y, 5);
                }
            }
            black_box(sweep_completed_rows(&mut grid));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut piece = create_piece(PieceKind::I);

    c.bench_function("rotate_i", |b| {
        b.iter(|| {
            rotate(black_box(&mut piece), RotationDirection::Clockwise);
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let grid = Matrix::new(12, 20);
    let piece = create_piece(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&grid), black_box(&piece), black_box(Position::new(4, 10))))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = FieldSession::new(12, 20, 12345);

    c.bench_function("spawn", |b| {
        b.iter(|| {
            black_box(session.spawn());
        })
    });
}

fn bench_rotate_active(c: &mut Criterion) {
    let mut session = FieldSession::new(12, 20, 12345);

    c.bench_function("rotate_active", |b| {
        b.iter(|| {
            session.rotate_active(RotationDirection::Clockwise);
        })
    });
}

criterion_group!(
    benches,
    bench_advance_time,
    bench_drop,
    bench_sweep,
    bench_rotate,
    bench_collides,
    bench_spawn,
    bench_rotate_active,
);
criterion_main!(benches);
