use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dynarr::{dynarr, DynArr};

fn bench_new(c: &mut Criterion) {
    c.bench_function("DynArr::new", |b| b.iter(DynArr::<u32>::new));
    c.bench_function("Vec::new", |b| b.iter(Vec::<u32>::new));
    c.bench_function("DynArr::with_capacity(64)", |b| b.iter(|| DynArr::<u32>::with_capacity(64)));
    c.bench_function("Vec::with_capacity(64)", |b| b.iter(|| Vec::<u32>::with_capacity(64)));
}

fn bench_push(c: &mut Criterion) {
    c.bench_function("DynArr::push(100) cold", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u32>::new();
            for i in 0..100 {
                arr.push(i);
            }
            arr
        })
    });
    c.bench_function("DynArr::push(100) preallocated", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u32>::with_capacity(100);
            for i in 0..100 {
                arr.push(i);
            }
            arr
        })
    });

    c.bench_function("Vec::push(100) cold", |b| {
        b.iter(|| {
            let mut arr = Vec::<u32>::new();
            for i in 0..100 {
                arr.push(i);
            }
            arr
        })
    });
    c.bench_function("Vec::push(100) preallocated", |b| {
        b.iter(|| {
            let mut arr = Vec::<u32>::with_capacity(100);
            for i in 0..100 {
                arr.push(i);
            }
            arr
        })
    });
}

fn bench_push_front(c: &mut Criterion) {
    c.bench_function("DynArr::push_front(100)", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u32>::new();
            for i in 0..100 {
                arr.push_front(i);
            }
            arr
        })
    });
    c.bench_function("Vec::insert(0, _)(100)", |b| {
        b.iter(|| {
            let mut arr = Vec::<u32>::new();
            for i in 0..100 {
                arr.insert(0, i);
            }
            arr
        })
    });
}

fn bench_insert_mid(c: &mut Criterion) {
    c.bench_function("DynArr::insert(len/2)(100)", |b| {
        b.iter(|| {
            let mut arr = DynArr::<u32>::new();
            for i in 0..100 {
                arr.insert(arr.len() / 2, i).unwrap();
            }
            arr
        })
    });
    c.bench_function("Vec::insert(len/2)(100)", |b| {
        b.iter(|| {
            let mut arr = Vec::<u32>::new();
            for i in 0..100 {
                arr.insert(arr.len() / 2, i);
            }
            arr
        })
    });
}

fn bench_pop(c: &mut Criterion) {
    c.bench_function("DynArr::pop(100)", |b| {
        b.iter(|| {
            let mut arr: DynArr<u32> = (0..100).collect();
            while arr.pop().is_some() {}
            arr
        })
    });
    c.bench_function("Vec::pop(100)", |b| {
        b.iter(|| {
            let mut arr: Vec<u32> = (0..100).collect();
            while arr.pop().is_some() {}
            arr
        })
    });
    c.bench_function("DynArr::pop_front(100)", |b| {
        b.iter(|| {
            let mut arr: DynArr<u32> = (0..100).collect();
            while arr.pop_front().is_some() {}
            arr
        })
    });
}

fn bench_index(c: &mut Criterion) {
    let arr = dynarr![5u32; 100];
    c.bench_function("DynArr::index(100)", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(arr[i]);
            }
        })
    });

    let vbuf = vec![5u32; 100];
    c.bench_function("Vec::index(100)", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(vbuf[i]);
            }
        })
    });
}

fn bench_from_elem(c: &mut Criterion) {
    c.bench_function("DynArr::from_elem(1000)", |b| b.iter(|| dynarr![7u32; 1000]));
    c.bench_function("vec![](1000)", |b| b.iter(|| vec![7u32; 1000]));
}

criterion_group!(
    benches,
    bench_new,
    bench_push,
    bench_push_front,
    bench_insert_mid,
    bench_pop,
    bench_index,
    bench_from_elem
);
criterion_main!(benches);
