//! Integration tests for ndarray support
//!
//! These tests run typed arrays through the full stream format.

#![cfg(feature = "ndarray")]

use ndpack::{NdArray, Value, from_bytes, to_bytes};
use ndarray::{ArrayD, Axis, IxDyn, array};
use std::rc::Rc;

fn through_stream(value: Rc<Value>) -> Rc<Value> {
    let bytes = to_bytes(&value).unwrap();
    from_bytes(&bytes).unwrap()
}

// =============================================================================
// Basic typed roundtrips
// =============================================================================

#[test]
fn roundtrip_ndarray_1d() {
    let arr = array![1.0f32, 2.0, 3.0, 4.0, 5.0].into_dyn();
    let expected = arr.clone();

    let back = through_stream(Rc::new(Value::Array(NdArray::from_ndarray(arr))));
    let decoded: ArrayD<f32> = back.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(expected, decoded);
}

#[test]
fn roundtrip_ndarray_2d() {
    let matrix = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]].into_dyn();
    let expected = matrix.clone();

    let back = through_stream(Rc::new(Value::Array(NdArray::from_ndarray(matrix))));
    let decoded: ArrayD<f64> = back.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(expected, decoded);
}

#[test]
fn roundtrip_ndarray_3d() {
    let tensor = ArrayD::<i32>::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
        (idx[0] * 12 + idx[1] * 4 + idx[2]) as i32
    });
    let expected = tensor.clone();

    let back = through_stream(Rc::new(Value::Array(NdArray::from_ndarray(tensor))));
    let decoded: ArrayD<i32> = back.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(expected, decoded);
}

#[test]
fn roundtrip_scalar() {
    let scalar = ArrayD::<u64>::from_elem(IxDyn(&[]), 42);
    let expected = scalar.clone();

    let back = through_stream(Rc::new(Value::Array(NdArray::from_ndarray(scalar))));
    let arr = back.as_array().unwrap();
    assert_eq!(arr.rank(), 0);
    assert_eq!(arr.elem_count(), 1);

    let decoded: ArrayD<u64> = arr.to_ndarray().unwrap();
    assert_eq!(expected, decoded);
}

// =============================================================================
// Non-contiguous views
// =============================================================================

#[test]
fn reversed_view_matches_contiguous_copy() {
    let mut reversed = array![1.0f64, 2.0, 3.0, 4.0, 5.0].into_dyn();
    reversed.invert_axis(Axis(0));
    assert!(!reversed.is_standard_layout());

    let expected = array![5.0f64, 4.0, 3.0, 2.0, 1.0].into_dyn();

    let from_view = NdArray::from_ndarray(reversed);
    let from_copy = NdArray::from_ndarray(expected.clone());
    assert_eq!(
        to_bytes(&Rc::new(Value::Array(from_view.clone()))).unwrap(),
        to_bytes(&Rc::new(Value::Array(from_copy))).unwrap()
    );

    let decoded: ArrayD<f64> = from_view.to_ndarray().unwrap();
    assert_eq!(decoded, expected);
}

#[test]
fn transposed_view_matches_contiguous_copy() {
    let base = ArrayD::<i64>::from_shape_fn(IxDyn(&[4, 5]), |idx| (idx[0] * 5 + idx[1]) as i64);
    let transposed = base.clone().reversed_axes();
    assert!(!transposed.is_standard_layout());
    let expected = transposed.clone();

    let packed = NdArray::from_ndarray(transposed);
    let back = through_stream(Rc::new(Value::Array(packed)));
    let decoded: ArrayD<i64> = back.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(expected, decoded);

    // identical to encoding an already-contiguous copy
    let contiguous = NdArray::from_ndarray(expected.as_standard_layout().into_owned());
    let again = through_stream(Rc::new(Value::Array(contiguous)));
    let decoded_again: ArrayD<i64> = again.as_array().unwrap().to_ndarray().unwrap();
    assert_eq!(decoded, decoded_again);
}

// =============================================================================
// Mixed graphs
// =============================================================================

#[test]
fn model_snapshot_graph() {
    let weights = ArrayD::<f32>::from_shape_fn(IxDyn(&[16, 8]), |idx| {
        (idx[0] * 8 + idx[1]) as f32 * 0.01
    });
    let bias = ArrayD::<f32>::zeros(IxDyn(&[16]));
    let labels = ArrayD::<i64>::from_shape_fn(IxDyn(&[10]), |idx| idx[0] as i64);

    let expected_weights = weights.clone();
    let expected_labels = labels.clone();

    let root = Rc::new(Value::Dict(vec![
        ("name".into(), Rc::new(Value::String("dense_1".into()))),
        (
            "weights".into(),
            Rc::new(Value::Array(NdArray::from_ndarray(weights))),
        ),
        (
            "bias".into(),
            Rc::new(Value::Array(NdArray::from_ndarray(bias))),
        ),
        (
            "labels".into(),
            Rc::new(Value::Array(NdArray::from_ndarray(labels))),
        ),
    ]));

    let back = through_stream(root);

    let weights_back: ArrayD<f32> = back
        .get("weights")
        .unwrap()
        .as_array()
        .unwrap()
        .to_ndarray()
        .unwrap();
    assert_eq!(weights_back, expected_weights);

    let labels_back: ArrayD<i64> = back
        .get("labels")
        .unwrap()
        .as_array()
        .unwrap()
        .to_ndarray()
        .unwrap();
    assert_eq!(labels_back, expected_labels);
}

#[test]
fn all_element_types_roundtrip() {
    macro_rules! check {
        ($($val:expr => $ty:ty),* $(,)?) => {
            $(
                let arr = array![$val, $val, $val].into_dyn();
                let expected = arr.clone();
                let back = through_stream(Rc::new(Value::Array(NdArray::from_ndarray(arr))));
                let decoded: ArrayD<$ty> = back.as_array().unwrap().to_ndarray().unwrap();
                assert_eq!(expected, decoded);
            )*
        };
    }

    check! {
        1u8 => u8,
        -1i8 => i8,
        300u16 => u16,
        -300i16 => i16,
        70_000u32 => u32,
        -70_000i32 => i32,
        1u64 << 40 => u64,
        -(1i64 << 40) => i64,
        1.5f32 => f32,
        -2.5f64 => f64,
    }
}
