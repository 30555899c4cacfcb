#![allow(missing_docs)]

mod storage;
