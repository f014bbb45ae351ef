//! Python bindings: a `Matrix` class over `f64` elements.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::{Error, Matrix, Result};

type Float = f64;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::ShapeMismatch { .. } => PyValueError::new_err(err.to_string()),
            Error::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        }
    }
}

type Elementwise = fn(&Matrix<Float>, &Matrix<Float>) -> Result<Matrix<Float>>;
type Broadcast = fn(&Matrix<Float>, Float) -> Matrix<Float>;

#[pyclass(name = "Matrix")]
#[derive(Clone)]
struct PyMatrix {
    inner: Matrix<Float>,
}

impl PyMatrix {
    fn binary(&self, other: &Bound<'_, PyAny>, elementwise: Elementwise, broadcast: Broadcast) -> PyResult<Self> {
        if let Ok(rhs) = other.downcast::<PyMatrix>() {
            let rhs = rhs.borrow();
            return Ok(Self { inner: elementwise(&self.inner, &rhs.inner)? });
        }
        if let Ok(value) = other.extract::<Float>() {
            return Ok(Self { inner: broadcast(&self.inner, value) });
        }
        Err(PyTypeError::new_err("operand must be a Matrix or a float"))
    }
}

#[pymethods]
impl PyMatrix {
    /// Matrix(rows, columns, values=None); values are column-major.
    #[new]
    #[pyo3(signature = (rows, columns, values=None))]
    fn new(rows: usize, columns: usize, values: Option<Vec<Float>>) -> PyResult<Self> {
        let inner = match values {
            Some(values) => Matrix::from_values(rows, columns, values)?,
            None => Matrix::new(rows, columns),
        };
        Ok(Self { inner })
    }

    fn __repr__(&self) -> String {
        format!("<Matrix: {} X {}>", self.inner.row_count(), self.inner.column_count())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.binary(other, Matrix::try_add, Matrix::add_scalar)
    }

    fn __sub__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.binary(other, Matrix::try_sub, Matrix::sub_scalar)
    }

    fn __mul__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.binary(other, Matrix::try_mul, Matrix::mul_scalar)
    }

    fn __truediv__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.binary(other, Matrix::try_div, Matrix::div_scalar)
    }

    #[getter]
    fn shape(&self) -> (usize, usize) {
        (self.inner.row_count(), self.inner.column_count())
    }

    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    fn at(&self, index: usize) -> PyResult<Float> {
        Ok(self.inner.at(index)?)
    }

    fn get_row(&self, row: usize) -> PyResult<Vec<Float>> {
        Ok(self.inner.get_row(row)?)
    }

    fn get_column(&self, column: usize) -> PyResult<Vec<Float>> {
        Ok(self.inner.get_column(column)?)
    }

    fn set_values(&mut self, values: Vec<Float>) -> PyResult<()> {
        Ok(self.inner.set_values(&values)?)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn transpose(&self) -> Self {
        Self { inner: self.inner.transpose() }
    }

    /// Copy as a `(rows, columns)` numpy array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<Float>>> {
        let (rows, columns) = self.shape();
        // column-major storage of the transpose is row-major storage of self
        let flat = self.inner.transpose().into_vec();
        PyArray1::from_vec(py, flat).reshape((rows, columns))
    }
}

#[pymodule]
fn geometry(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    m.setattr(
        "__doc__",
        "Dense column-major matrices backed by the `geometry` Rust crate.",
    )?;
    Ok(())
}
