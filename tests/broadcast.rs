use itertools::Itertools;
use ndvalue::prelude::*;
use ndvalue::{broadcast_shape, Detail};

#[test]
fn broadcast_1() {
    let a_dim = (2, 4, 2, 2).into_dimension();
    let b_dim = (2, 1, 2, 1).into_dimension();
    let b = ArrayValue::from_shape_fn(b_dim, |ix| ix.slice().iter().sum::<usize>());
    assert!(b.broadcast(a_dim).is_ok());

    let c = ArrayValue::from_elem((2, 1), 0.);
    assert!(c.broadcast(1).is_err());
    assert!(c.broadcast(()).is_err());
    assert!(c.broadcast((2, 1)).is_ok());
    assert!(c.broadcast((2, 2)).is_ok());
    assert!(c.broadcast((32, 2, 1)).is_ok());
    assert!(c.broadcast((32, 1, 2)).is_err());

    /* () can be broadcast to anything */
    let z = ArrayValue::<f32>::zeros(());
    assert!(z.broadcast(()).is_ok());
    assert!(z.broadcast(1).is_ok());
    assert!(z.broadcast(3).is_ok());
    assert!(z.broadcast((7, 2, 9)).is_ok());
    assert!(z.broadcast((7, 2, 9, 1)).is_ok());
}

#[test]
fn scalar_fills_target() {
    let x = arr0(7.0);
    let b = x.broadcast((3, 2)).unwrap();
    assert_eq!(b.shape(), &[3, 2]);
    assert!(b.is_view());
    assert!(b.iter().all(|&e| e == 7.0));
    assert_eq!(b.strides(), &[0, 0]);
}

#[test]
fn test_broadcast() {
    let (n, k) = (16, 16);
    let x1 = 1.;
    // b0 broadcast 1 -> n, k
    let x = ArrayValue::from(vec![x1]);
    let b0 = x.broadcast((n, k)).unwrap();
    // b1 broadcast n -> n, k
    let b1 = ArrayValue::from_elem(n, x1);
    let b1 = b1.broadcast((n, k)).unwrap();
    // b2 is n, k
    let b2 = ArrayValue::from_elem((n, k), x1);

    assert_eq!(b0, b1);
    assert_eq!(b0, b2);
}

#[test]
fn identity_broadcast() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let b = a.broadcast(a.dim()).unwrap();
    assert_eq!(b, a);
    assert_eq!(b.strides(), a.strides());
}

#[test]
fn incompatible_shapes() {
    let a = arr1(&[1, 2, 3]);
    let err = a.broadcast((3, 2)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BroadcastIncompatible);
    assert_eq!(
        err.detail(),
        &Detail::Broadcast {
            from: 3usize.into_dimension(),
            to: (3, 2).into_dimension(),
        }
    );
    // fewer target axes than source axes
    let err = arr2(&[[1]]).broadcast(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BroadcastIncompatible);
}

/// Every source shape built from extents {1, 2, 3} of rank 0..=4, broadcast
/// into every compatible target of rank 0..=4 made of extents {1, 2, 3}.
#[test]
fn enumerated_rank_pairs() {
    let extents = [1usize, 2, 3];
    let shapes = |rank: usize| -> Vec<Vec<usize>> {
        if rank == 0 {
            return vec![vec![]];
        }
        (0..rank)
            .map(|_| extents.iter().cloned())
            .multi_cartesian_product()
            .collect()
    };
    let mut checked = 0;
    for src_rank in 0..=4 {
        for src_shape in shapes(src_rank) {
            let src_dim = Dim::from_slice(&src_shape).unwrap();
            let src = ArrayValue::from_shape_fn(src_dim, |ix| ix.slice().to_vec());
            for dst_rank in src_rank..=4 {
                for dst_shape in shapes(dst_rank) {
                    let dst_dim = Dim::from_slice(&dst_shape).unwrap();
                    let lead = dst_rank - src_rank;
                    let compatible = src_shape
                        .iter()
                        .zip(&dst_shape[lead..])
                        .all(|(&s, &d)| s == d || s == 1);
                    let result = src.broadcast(dst_dim);
                    if !compatible {
                        assert_eq!(
                            result.unwrap_err().kind(),
                            ErrorKind::BroadcastIncompatible,
                            "{:?} -> {:?}",
                            src_shape,
                            dst_shape
                        );
                        continue;
                    }
                    let b = result.unwrap();
                    assert_eq!(b.shape(), &dst_shape[..]);
                    for (ix, elt) in b.indexed_iter() {
                        let expected: Vec<usize> = ix.slice()[lead..]
                            .iter()
                            .zip(&src_shape)
                            .map(|(&i, &s)| if s == 1 { 0 } else { i })
                            .collect();
                        assert_eq!(elt, &expected, "{:?} -> {:?} at {:?}", src_shape, dst_shape, ix);
                    }
                    checked += 1;
                }
            }
        }
    }
    assert!(checked > 1000);
}

#[test]
fn co_broadcast() {
    let a = (4, 1, 3).into_dimension();
    let b = (2, 1).into_dimension();
    assert_eq!(broadcast_shape(&a, &b).unwrap(), (4, 2, 3).into_dimension());
    assert_eq!(broadcast_shape(&b, &a).unwrap(), (4, 2, 3).into_dimension());
    assert_eq!(broadcast_shape(&Dim::scalar(), &b).unwrap(), b);
    let err = broadcast_shape(&(2, 3).into_dimension(), &(3, 2).into_dimension()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BroadcastIncompatible);
}

#[test]
fn test_broadcast_with() {
    let a = arr2(&[[1., 2.], [3., 4.]]);
    let b = aview0(&1.);
    let (a1, b1) = a.broadcast_with(&b).unwrap();
    assert_eq!(a1, arr2(&[[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(b1, arr2(&[[1.0, 1.0], [1.0, 1.0]]));

    let a = arr2(&[[2], [3], [4]]);
    let b = arr1(&[5, 6, 7]);
    let (a1, b1) = a.broadcast_with(&b).unwrap();
    assert_eq!(a1, arr2(&[[2, 2, 2], [3, 3, 3], [4, 4, 4]]));
    assert_eq!(b1, arr2(&[[5, 6, 7], [5, 6, 7], [5, 6, 7]]));

    // Negative strides and non-contiguous memory
    let s = ArrayValue::from_shape_vec((2, 3, 2), (1..=12).collect()).unwrap();
    let a = s.slice(&s![..;-1, ..;2, ..]).unwrap();
    let b = s.slice(&s![..2, -1, ..]).unwrap();
    let (a1, b1) = a.broadcast_with(&b).unwrap();
    assert_eq!(a1, arr3(&[[[7, 8], [11, 12]], [[1, 2], [5, 6]]]));
    assert_eq!(b1, arr3(&[[[5, 6], [11, 12]], [[5, 6], [11, 12]]]));

    let a = arr2(&[[2, 2], [3, 3], [4, 4]]);
    let b = arr1(&[5, 6, 7]);
    let err = a.broadcast_with(&b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BroadcastIncompatible);
}

#[test]
fn broadcast_of_a_slice() {
    let a = arr2(&[[1, 2, 3], [4, 5, 6]]);
    let col = a.slice(&s![.., 2..]).unwrap();
    let b = col.broadcast((2, 2, 4)).unwrap();
    assert_eq!(b.slice(&s![1, .., 3]).unwrap(), arr1(&[3, 6]));
    assert!(b.iter().take(4).all(|&x| x == 3));
}
