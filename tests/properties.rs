use ndvalue::coerce::{coerce_array, Coercion};
use ndvalue::prelude::*;
use quickcheck::{quickcheck, TestResult};

/// Build a shape of rank `shape.len().min(4)` with extents in `0..4`.
fn small_dim(shape: &[u8]) -> Dim {
    let extents: Vec<usize> = shape.iter().take(4).map(|&x| (x % 4) as usize).collect();
    Dim::from_slice(&extents).unwrap()
}

fn numbered(dim: Dim) -> OwnedValue<i64> {
    let mut n = 0;
    ArrayValue::from_shape_fn(dim, |_| {
        n += 1;
        n
    })
}

quickcheck! {
    fn full_selection_round_trips(shape: Vec<u8>) -> bool {
        let a = numbered(small_dim(&shape));
        let full = vec![AxisArg::Full; a.ndim()];
        let whole = a.slice(&full).unwrap();
        let reversed = vec![AxisArg::from(Slice::from(..).step_by(-1)); a.ndim()];
        let twice = a.slice(&reversed).unwrap().slice_move(&reversed).unwrap();
        whole.is_view() && whole == a && twice == a
    }

    fn negative_bounds_are_equivalent(len: u8, i: u8, j: u8, step: i8) -> TestResult {
        let n = 1 + (len % 8) as isize;
        let (i, j) = ((i as isize) % n, (j as isize) % n);
        let step = (step % 4) as isize;
        if step == 0 {
            return TestResult::discard();
        }
        let a = numbered(Dim::from_slice(&[n as usize]).unwrap());
        let pos = a.slice(&s![i..j;step]).unwrap();
        let neg = a.slice(&s![i - n..j - n;step]).unwrap();
        let index = a.slice(&s![i]).unwrap() == a.slice(&s![i - n]).unwrap();
        TestResult::from_bool(pos == neg && index)
    }

    fn broadcast_to_own_shape_is_identity(shape: Vec<u8>) -> bool {
        let a = numbered(small_dim(&shape));
        let b = a.broadcast(a.dim()).unwrap();
        b == a && b.strides() == a.strides()
    }

    fn single_value_collapses_axis(shape: Vec<u8>, axis: u8, i: u8) -> TestResult {
        let dim = small_dim(&shape);
        let ndim = dim.ndim();
        if ndim == 0 {
            return TestResult::discard();
        }
        let axis = axis as usize % ndim;
        let extent = dim.slice()[axis];
        if extent == 0 {
            return TestResult::discard();
        }
        let i = i as usize % extent;
        let a = numbered(dim);

        let mut args = vec![AxisArg::Full; ndim];
        args[axis] = AxisArg::Index(i as isize - extent as isize);
        let by_index = a.slice(&args).unwrap();
        args[axis] = AxisArg::Integers(vec![i as isize]);
        let by_list = a.slice(&args).unwrap();

        let elements_match = by_index.indexed_iter().all(|(ix, elt)| {
            let mut full = ix.slice().to_vec();
            full.insert(axis, i);
            a.get(&full) == Some(elt)
        });
        TestResult::from_bool(
            by_index.ndim() == ndim - 1
                && by_index.len() == a.len() / extent
                && by_list == by_index
                && elements_match,
        )
    }

    fn lenient_coercion_is_idempotent(xs: Vec<f64>) -> TestResult {
        let v = Value::from(ArrayValue::from(xs));
        let once = match coerce_array::<i64>(v, Coercion::Lenient) {
            Ok(a) => a,
            Err(err) => return TestResult::from_bool(err.kind() == ErrorKind::TypeMismatch),
        };
        let twice = coerce_array::<i64>(Value::from(once.clone()), Coercion::Lenient).unwrap();
        TestResult::from_bool(once == twice)
    }

    fn assignment_is_all_or_nothing(rows: u8, list: Vec<i8>, rhs_rows: u8) -> bool {
        let (r, c) = (1 + (rows % 4) as usize, 3);
        let mut a = numbered(Dim::from_slice(&[r, c]).unwrap());
        let before = a.clone();
        let list: Vec<isize> = list.iter().take(5).map(|&i| (i % 6) as isize).collect();
        let rhs = ArrayValue::from_elem(((rhs_rows % 4) as usize, c), 0i64);
        match a.slice_assign(&[AxisArg::Integers(list.clone())], &rhs) {
            Err(_) => a == before,
            Ok(()) => {
                let r = r as isize;
                let touched: Vec<usize> = list.iter().map(|&i| ((i + r) % r) as usize).collect();
                (0..r as usize).all(|row| {
                    let now = a.slice(&s![row, ..]).unwrap();
                    if touched.contains(&row) {
                        now.iter().all(|&x| x == 0)
                    } else {
                        now == before.slice(&s![row, ..]).unwrap()
                    }
                })
            }
        }
    }
}
