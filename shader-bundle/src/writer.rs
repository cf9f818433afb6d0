use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{ArrayEncoding, CompiledShader, Error, Result, SYMBOL_PREFIX};

fn declaration(shader: &CompiledShader, encoding: &dyn ArrayEncoding) -> String {
    format!(
        "static const {} {SYMBOL_PREFIX}{}[] = {{\n{}\n}};\n\n",
        encoding.element_type(),
        shader.name,
        encoding.encode(&shader.binary).join("\n")
    )
}

/// Renders every declaration, in order, as the header would contain it.
///
/// An empty binary renders as an empty initializer, which C and C++ reject;
/// [`Generator`](crate::Generator) refuses empty compiler output before it
/// gets here.
pub fn render(shaders: &[CompiledShader], encoding: &dyn ArrayEncoding) -> String {
    shaders
        .iter()
        .map(|shader| declaration(shader, encoding))
        .collect()
}

/// Replaces the contents of `path` with one declaration per shader.
///
/// The file is truncated before the first declaration is written; a failure
/// part way through leaves it incomplete.
pub fn write(shaders: &[CompiledShader], encoding: &dyn ArrayEncoding, path: &Path) -> Result<()> {
    let to_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(to_err)?);
    for shader in shaders {
        out.write_all(declaration(shader, encoding).as_bytes())
            .map_err(to_err)?;
    }
    out.flush().map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteArray, WordArray};

    fn shader(name: &str, binary: &[u8]) -> CompiledShader {
        CompiledShader {
            name: name.to_owned(),
            binary: binary.to_vec(),
        }
    }

    #[test]
    fn test_render_words() {
        let shaders = [shader("Vert", &[1, 2, 3, 4, 5]), shader("Frag2D", &[0xff; 4])];

        assert_eq!(
            render(&shaders, &WordArray),
            "static const unsigned int s_aVert[] = {\n\
             \t0x04030201, 0x00000005,\n\
             };\n\
             \n\
             static const unsigned int s_aFrag2D[] = {\n\
             \t0xffffffff,\n\
             };\n\
             \n"
        );
    }

    #[test]
    fn test_render_bytes() {
        assert_eq!(
            render(&[shader("Vert", &[0x03, 0x02, 0x23, 0x07])], &ByteArray),
            "static const unsigned char s_aVert[] = {\n\t0x03, 0x02, 0x23, 0x07,\n};\n\n"
        );
    }

    #[test]
    fn test_render_empty_binary() {
        assert_eq!(
            render(&[shader("Empty", &[])], &WordArray),
            "static const unsigned int s_aEmpty[] = {\n\n};\n\n"
        );
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let dir = std::env::temp_dir().join(format!("shader-bundle-writer-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("shaders.h");
        std::fs::write(&path, "stale contents that are longer than the new header\n".repeat(8)).unwrap();

        let shaders = [shader("Vert", &[1, 2, 3, 4])];
        write(&shaders, &WordArray, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render(&shaders, &WordArray)
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join(format!("shader-bundle-missing-{}", std::process::id()))
            .join("shaders.h");

        assert!(matches!(
            write(&[], &WordArray, &path),
            Err(Error::Write { .. })
        ));
    }
}
