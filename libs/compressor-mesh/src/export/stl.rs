//! STL export and import.
//!
//! Binary layout: 80-byte header, little-endian triangle count, then per
//! triangle a facet normal, three vertex positions (all f32) and a u16
//! attribute. The ASCII writer prints f32 values with their shortest
//! round-trip form, so both encodings reload to the same positions.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::STL_HEADER;
use glam::{DVec3, Vec3};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Write a mesh as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    let mut header = [0u8; HEADER_LEN];
    let len = STL_HEADER.len().min(HEADER_LEN);
    header[..len].copy_from_slice(&STL_HEADER.as_bytes()[..len]);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        write_vec(writer, mesh.face_normal(index))?;
        for corner in mesh.triangle_corners(index) {
            write_vec(writer, corner)?;
        }
        // Attribute byte count (unused)
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a mesh as ASCII STL under the given solid name.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "solid {}", name)?;
    for index in 0..mesh.triangle_count() {
        let n = mesh.face_normal(index).as_vec3();
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for corner in mesh.triangle_corners(index) {
            let v = corner.as_vec3();
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", name)
}

/// Saves a mesh, appending `.stl` unless the path already ends with it.
///
/// Returns the path actually written.
///
/// # Example
///
/// ```rust,no_run
/// use compressor_mesh::export::{save_stl, StlFormat};
/// use compressor_mesh::primitives::cylinder;
///
/// let hub = cylinder(50.0, 30.0, 64).unwrap();
/// let path = save_stl(&hub, "hub", StlFormat::Binary).unwrap();
/// assert_eq!(path.extension().unwrap(), "stl");
/// ```
pub fn save_stl(
    mesh: &Mesh,
    path: impl AsRef<Path>,
    format: StlFormat,
) -> Result<PathBuf, MeshError> {
    if mesh.triangle_count() == 0 {
        return Err(MeshError::EmptyMesh);
    }

    let path = with_stl_extension(path.as_ref());
    let mut writer = BufWriter::new(File::create(&path)?);
    match format {
        StlFormat::Binary => write_stl_binary(mesh, &mut writer)?,
        StlFormat::Ascii => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("mesh");
            write_stl_ascii(mesh, name, &mut writer)?
        }
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        ?format,
        "wrote STL"
    );
    Ok(path)
}

/// Decodes an STL file in either encoding.
///
/// The file is a triangle soup; corners with bit-identical coordinates are
/// welded back into shared vertices.
pub fn read_stl(bytes: &[u8]) -> Result<Mesh, MeshError> {
    if is_binary(bytes) {
        read_binary(bytes)
    } else if is_ascii(bytes) {
        read_ascii(bytes)
    } else {
        Err(MeshError::malformed_stl(format!(
            "neither binary nor ASCII STL ({} bytes)",
            bytes.len()
        )))
    }
}

/// Reads and decodes an STL file from disk.
pub fn load_stl(path: impl AsRef<Path>) -> Result<Mesh, MeshError> {
    let bytes = std::fs::read(path.as_ref())?;
    read_stl(&bytes)
}

fn with_stl_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("stl"))
        .unwrap_or(false);
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".stl");
        PathBuf::from(name)
    }
}

/// A binary file's size is fully determined by its triangle count.
fn is_binary(bytes: &[u8]) -> bool {
    triangle_count(bytes)
        .map(|count| bytes.len() == HEADER_LEN + 4 + FACET_LEN * count)
        .unwrap_or(false)
}

fn is_ascii(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(b"solid")
}

fn triangle_count(bytes: &[u8]) -> Option<usize> {
    let raw = bytes.get(HEADER_LEN..HEADER_LEN + 4)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize)
}

fn read_binary(bytes: &[u8]) -> Result<Mesh, MeshError> {
    let count = triangle_count(bytes)
        .ok_or_else(|| MeshError::malformed_stl("truncated binary header"))?;
    let mut welder = Welder::with_capacity(count);

    for facet in bytes[HEADER_LEN + 4..].chunks_exact(FACET_LEN) {
        // Skip the stored normal; winding carries the orientation
        let corners = [
            read_vec(&facet[12..24]),
            read_vec(&facet[24..36]),
            read_vec(&facet[36..48]),
        ];
        welder.push(corners);
    }

    Ok(welder.finish())
}

fn read_ascii(bytes: &[u8]) -> Result<Mesh, MeshError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|err| MeshError::malformed_stl(format!("ASCII STL is not UTF-8: {}", err)))?;

    let mut welder = Welder::with_capacity(0);
    let mut corners = Vec::with_capacity(3);
    let mut in_loop = false;

    // Only `vertex` lines between `outer loop` and `endloop` are corners,
    // so a solid or facet may carry any name.
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("outer") => {
                in_loop = true;
                corners.clear();
            }
            Some("endloop") => {
                if corners.len() != 3 {
                    return Err(MeshError::malformed_stl(format!(
                        "facet with {} vertices",
                        corners.len()
                    )));
                }
                welder.push([corners[0], corners[1], corners[2]]);
                corners.clear();
                in_loop = false;
            }
            Some("vertex") if in_loop => {
                let mut coordinate = || -> Result<f32, MeshError> {
                    let raw = tokens.next().ok_or_else(|| {
                        MeshError::malformed_stl("vertex with fewer than 3 coordinates")
                    })?;
                    raw.parse::<f32>()
                        .map_err(|_| MeshError::malformed_stl(format!("bad coordinate `{}`", raw)))
                };
                corners.push(Vec3::new(coordinate()?, coordinate()?, coordinate()?));
            }
            _ => {}
        }
    }

    if in_loop {
        return Err(MeshError::malformed_stl("unterminated facet loop"));
    }
    Ok(welder.finish())
}

/// Merges triangle-soup corners with identical f32 coordinates.
struct Welder {
    mesh: Mesh,
    index: HashMap<[u32; 3], u32>,
}

impl Welder {
    fn with_capacity(triangles: usize) -> Self {
        Self {
            mesh: Mesh::with_capacity(triangles / 2, triangles),
            index: HashMap::with_capacity(triangles / 2),
        }
    }

    fn push(&mut self, corners: [Vec3; 3]) {
        let [a, b, c] = corners.map(|corner| self.vertex(corner));
        self.mesh.add_triangle(a, b, c);
    }

    fn vertex(&mut self, position: Vec3) -> u32 {
        let key = [position.x.to_bits(), position.y.to_bits(), position.z.to_bits()];
        if let Some(&index) = self.index.get(&key) {
            return index;
        }
        let index = self.mesh.add_vertex(position.as_dvec3());
        self.index.insert(key, index);
        index
    }

    fn finish(self) -> Mesh {
        self.mesh
    }
}

fn write_vec<W: Write>(writer: &mut W, v: DVec3) -> io::Result<()> {
    let v = v.as_vec3();
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())
}

fn read_vec(raw: &[u8]) -> Vec3 {
    let f = |i: usize| f32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]);
    Vec3::new(f(0), f(4), f(8))
}
