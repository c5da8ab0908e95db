use lazy_dijkstra::data_structures::{BoundedMinHeap, HeapEntry};
use lazy_dijkstra::Error;

fn drain(heap: &mut BoundedMinHeap) -> Vec<usize> {
    let mut order = Vec::new();
    while !heap.is_empty() {
        order.push(heap.remove_min().unwrap());
    }
    order
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert!(matches!(BoundedMinHeap::new(0), Err(Error::InvalidCapacity(0))));
}

#[test]
fn test_remove_from_empty_heap_fails() {
    let mut heap = BoundedMinHeap::new(2).unwrap();
    assert!(heap.is_empty());
    assert!(matches!(heap.remove_min(), Err(Error::EmptyQueue)));

    heap.put(4, 9).unwrap();
    assert_eq!(heap.remove_min().unwrap(), 4);
    assert!(matches!(heap.remove_min(), Err(Error::EmptyQueue)));
}

#[test]
fn test_put_beyond_capacity_fails_without_corrupting_heap() {
    let mut heap = BoundedMinHeap::new(3).unwrap();
    heap.put(0, 3).unwrap();
    heap.put(1, 1).unwrap();
    heap.put(2, 2).unwrap();

    let err = heap.put(3, 0).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { capacity: 3 }));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), 3);
    assert_eq!(drain(&mut heap), vec![1, 2, 0]);
}

#[test]
fn test_capacity_is_reusable_after_removal() {
    let mut heap = BoundedMinHeap::new(1).unwrap();
    heap.put(0, 1).unwrap();
    assert!(heap.put(1, 0).is_err());
    heap.remove_min().unwrap();
    heap.put(1, 0).unwrap();
    assert_eq!(heap.peek(), Some(HeapEntry { vertex: 1, distance: 0 }));
}

#[test]
fn test_pops_in_non_decreasing_distance_order() {
    let distances = [42, 7, 19, 0, 7, 100, 3, 3, 56, 1];
    let mut heap = BoundedMinHeap::new(distances.len()).unwrap();
    for (vertex, &distance) in distances.iter().enumerate() {
        heap.put(vertex, distance).unwrap();
    }

    let popped: Vec<i32> = drain(&mut heap).into_iter().map(|v| distances[v]).collect();
    let mut sorted = popped.clone();
    sorted.sort();
    assert_eq!(popped, sorted);
}

#[test]
fn test_equal_distances_follow_heap_tie_break() {
    let mut heap = BoundedMinHeap::new(4).unwrap();
    for vertex in 0..4 {
        heap.put(vertex, 5).unwrap();
    }
    // Ties never swap, so the last leaf moved to the root stays there
    assert_eq!(drain(&mut heap), vec![0, 3, 2, 1]);
}

#[test]
fn test_mixed_distances_exact_order() {
    let mut heap = BoundedMinHeap::new(5).unwrap();
    heap.put(7, 3).unwrap();
    heap.put(8, 1).unwrap();
    heap.put(9, 3).unwrap();
    heap.put(10, 1).unwrap();
    heap.put(11, 2).unwrap();

    assert_eq!(heap.to_string(), "[8:1, 10:1, 9:3, 7:3, 11:2]");
    assert_eq!(drain(&mut heap), vec![8, 10, 11, 9, 7]);
}

#[test]
fn test_display_empty_heap() {
    let heap = BoundedMinHeap::new(1).unwrap();
    assert_eq!(heap.to_string(), "[]");
}

#[test]
fn test_duplicate_vertices_are_kept() {
    let mut heap = BoundedMinHeap::new(3).unwrap();
    heap.put(2, 10).unwrap();
    heap.put(2, 4).unwrap();
    heap.put(1, 6).unwrap();
    assert_eq!(heap.len(), 3);
    assert_eq!(drain(&mut heap), vec![2, 1, 2]);
}
