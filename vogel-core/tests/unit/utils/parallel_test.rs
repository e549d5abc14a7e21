use super::*;

#[test]
fn can_collect_in_parallel_keeping_order() {
    let source = (0..100).collect::<Vec<i32>>();

    let result = parallel_collect(&source, |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let result = pool.execute(|| parallel_collect(&[1, 2, 3], |item| item + 1));

    assert_eq!(pool.num_threads(), 2);
    assert_eq!(result, vec![2, 3, 4]);
}
