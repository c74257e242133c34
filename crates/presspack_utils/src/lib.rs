pub mod hash;
pub mod indexmap;
pub mod kebab;
pub mod path_ext;
pub mod php_literal;
