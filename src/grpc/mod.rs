//! gRPC request path and proto location helpers

pub mod metadata;

pub use metadata::{parse_header, MergeStrategy};

/// Build the request path for a method, `/<package.Service>/<Method>`
pub fn method_path(service: &str, method: &str) -> String {
    format!("/{}/{}", service, method)
}

/// Strip exactly one leading `/` from an RPC path
///
/// grpcurl takes `package.Service/Method` as its final argument, while the
/// wire path carries the leading slash.
pub fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Directory component of a proto file path: everything before the last `/`
///
/// Returns an empty string when the path has no separator.
pub fn import_dir_of(proto_file: &str) -> &str {
    match proto_file.rfind('/') {
        Some(idx) => &proto_file[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_path() {
        assert_eq!(method_path("grpc.health.v1.Health", "Check"), "/grpc.health.v1.Health/Check");
    }

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/foo.Bar/Baz"), "foo.Bar/Baz");
        assert_eq!(strip_leading_slash("foo.Bar/Baz"), "foo.Bar/Baz");
        assert_eq!(strip_leading_slash("//foo.Bar/Baz"), "/foo.Bar/Baz");
        assert_eq!(strip_leading_slash(""), "");
    }

    #[test]
    fn test_import_dir_of() {
        assert_eq!(import_dir_of("/home/me/protos/greet.proto"), "/home/me/protos");
        assert_eq!(import_dir_of("protos/v1/greet.proto"), "protos/v1");
        assert_eq!(import_dir_of("/greet.proto"), "");
        assert_eq!(import_dir_of("greet.proto"), "");
        assert_eq!(import_dir_of(""), "");
    }
}
