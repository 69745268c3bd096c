use ndvalue::ops::{self, OpContext};
use ndvalue::prelude::*;
use ndvalue::slice::classify;
use ndvalue::{Detail, IndexKind};

fn int(i: i64) -> Value<'static> {
    Value::from(i)
}

fn range(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Value<'static> {
    Value::from(vec![Value::from(start), Value::from(stop), Value::from(step)])
}

fn ctx() -> OpContext {
    OpContext::new("slice", "model.x[...]")
}

#[test]
fn classify_operands() {
    assert_eq!(classify(&Value::Nil, 0).unwrap(), AxisArg::Full);
    assert_eq!(classify(&int(-2), 0).unwrap(), AxisArg::Index(-2));
    assert_eq!(
        classify(&range(Some(1), None, Some(-1)), 0).unwrap(),
        AxisArg::Slice(Slice::new(Some(1), None, -1))
    );
    assert_eq!(
        classify(&Value::from(vec![int(3)]), 0).unwrap(),
        AxisArg::Slice(Slice::new(Some(3), None, 1))
    );
    assert_eq!(
        classify(&Value::from(arr1(&[0i64, -1])), 0).unwrap(),
        AxisArg::Integers(vec![0, -1])
    );
    let mask = classify(&Value::from(arr1(&[true, false])), 0).unwrap();
    assert_eq!(mask.kind(), IndexKind::BooleanMask);
}

#[test]
fn classify_rejects() {
    let err = classify(&Value::from(1.5), 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.detail(),
        &Detail::NotAnIndex {
            axis: 2,
            found: "a float array"
        }
    );
    for value in [
        Value::from(true),
        Value::from("1"),
        Value::from(vec![]),
        Value::from(vec![int(1), int(2), int(3), int(4)]),
        Value::from(vec![Value::from(1.0)]),
    ] {
        assert_eq!(classify(&value, 0).unwrap_err().kind(), ErrorKind::TypeMismatch, "{}", value);
    }
    let err = classify(&Value::from(arr2(&[[0i64, 1]])), 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RankMismatch);
}

#[test]
fn slice_values() {
    let x = Value::from(arr1(&[10i64, 20, 30, 40, 50]));
    let y = ops::slice(&ctx(), &x, &[range(Some(1), Some(4), None)]).unwrap();
    assert_eq!(y, Value::from(arr1(&[20i64, 30, 40])));
    assert!(y.is_view());

    let m = Value::from(ArrayValue::from_shape_fn((5, 5), |ix| (5 * ix.slice()[0] + ix.slice()[1]) as f64));
    let r = range(Some(-4), Some(-1), Some(2));
    let y = ops::slice(&ctx(), &m, &[r.clone(), r]).unwrap();
    assert_eq!(y, Value::from(arr2(&[[6., 8.], [16., 18.]])));

    let cols = Value::from(arr1(&[0i64, -1]));
    let y = ops::slice(&ctx(), &m, &[Value::Nil, cols]).unwrap();
    assert_eq!(y.ndim(), Some(2));
    assert!(!y.is_view());
    let a = y.as_array::<f64>().unwrap();
    assert_eq!(a.shape(), &[5, 2]);
    assert_eq!(a[[4, 1]], 24.);

    let b = Value::from(arr1(&[true, false, true]));
    let y = ops::slice(&ctx(), &b, &[int(-1)]).unwrap();
    assert_eq!(y, Value::from(true));
}

#[test]
fn errors_carry_context() {
    let x = Value::from(arr1(&[1i64, 2, 3]));
    let err = ops::slice(&ctx(), &x, &[int(3)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    let context = err.context().unwrap();
    assert_eq!(context.name, "slice");
    assert_eq!(context.label, "model.x[...]");
    assert_eq!(
        err.to_string(),
        "slice (model.x[...]): index out of bounds: index 3 is out of bounds for axis 0 with extent 3"
    );

    let err = ops::slice(&ctx(), &x, &[Value::from(0.5)]).unwrap_err();
    assert!(err.context().is_some());

    let err = ops::broadcast(&OpContext::new("broadcast", ""), &x, &[2, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BroadcastIncompatible);
    assert!(err.to_string().starts_with("broadcast: "));
}

#[test]
fn non_array_operands() {
    for value in [Value::Nil, Value::from("abc"), Value::from(vec![int(1)])] {
        let err = ops::slice(&ctx(), &value, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let err = ops::broadcast(&ctx(), &value, &[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let mut target = value.clone();
        let err = ops::slice_assign(&ctx(), &mut target, &[], int(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(target, value);
    }
}

#[test]
fn slice_assign_coerces_rhs() {
    let ctx = OpContext::new("slice_assign", "x[1:3] = ...");
    let mut x = Value::from(arr1(&[0i64, 0, 0, 0]));
    ops::slice_assign(&ctx, &mut x, &[range(Some(1), Some(3), None)], Value::from(arr1(&[1.9, -2.9])))
        .unwrap();
    assert_eq!(x, Value::from(arr1(&[0i64, 1, -2, 0])));

    // a list of scalars reads as a vector
    let rows = Value::from(arr1(&[1i64, 3]));
    let mut m = Value::from(ArrayValue::<f64>::zeros((5, 5)));
    let rhs = Value::from(vec![int(1), Value::from(2.5), Value::from(true), int(0), int(0)]);
    ops::slice_assign(&ctx, &mut m, &[rows, Value::Nil], rhs).unwrap();
    let a = m.as_array::<f64>().unwrap();
    assert_eq!(a.slice(&s![1, ..]).unwrap(), arr1(&[1., 2.5, 1., 0., 0.]));
    assert_eq!(a.slice(&s![3, ..]).unwrap(), arr1(&[1., 2.5, 1., 0., 0.]));
    assert_eq!(a.slice(&s![0, ..]).unwrap(), arr1(&[0.; 5]));
}

#[test]
fn slice_assign_failures_leave_target() {
    let ctx = OpContext::new("slice_assign", "");
    let mut x = Value::from(arr1(&[1i64, 2, 3]));
    let before = x.clone();

    let err = ops::slice_assign(&ctx, &mut x, &[Value::Nil], Value::from(arr1(&[1i64, 2]))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    assert_eq!(x, before);

    let err = ops::slice_assign(&ctx, &mut x, &[Value::Nil], Value::from(f64::NAN)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(x, before);

    let err = ops::slice_assign(&ctx, &mut x, &[Value::Nil], Value::from("7")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.context().unwrap().name, "slice_assign");
    assert_eq!(x, before);
}

#[test]
fn slice_assign_promotes_view_target() {
    let data = [1i64, 2, 3];
    let mut x = Value::from(aview1(&data));
    assert!(x.is_view());
    ops::slice_assign(&ctx(), &mut x, &[int(0)], int(9)).unwrap();
    assert!(!x.is_view());
    assert_eq!(x, Value::from(arr1(&[9i64, 2, 3])));
    assert_eq!(data, [1, 2, 3]);
}

#[test]
fn broadcast_values() {
    let ctx = OpContext::new("broadcast", "b");
    let x = Value::from(7.0);
    let y = ops::broadcast(&ctx, &x, &[3, 2]).unwrap();
    assert!(y.is_view());
    assert_eq!(y, Value::from(ArrayValue::from_elem((3, 2), 7.0)));

    let err = ops::broadcast(&ctx, &x, &[1, 1, 1, 1, 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RankMismatch);
}
