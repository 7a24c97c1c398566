//! Wavefront OBJ/MTL export.
//!
//! A static snapshot of the cloth in a textual interchange format:
//! one `v` line per vertex position, one `vt` per texture coordinate
//! (scaled by a tiling factor), one `vn` per vertex normal, then one
//! `f` line per triangle referencing all three parallel arrays by
//! 1-based index. An optional MTL sidecar describes a plain
//! double-sided cloth material; texture files themselves are never
//! touched, only referenced by name.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use drapa_solver::Cloth;
use drapa_types::DrapaResult;

/// Name of the material every exported face uses.
const MATERIAL_NAME: &str = "clothMat";

/// Options for an OBJ export.
#[derive(Debug, Clone)]
pub struct ObjExportOptions {
    /// Tiling factor applied to every texture coordinate.
    pub uv_scale: f32,
    /// MTL sidecar filename (written next to the OBJ). `None` skips
    /// the sidecar and the `mtllib` reference.
    pub mtl_name: Option<String>,
    /// Diffuse texture filename referenced from the MTL. The file is
    /// not copied or validated.
    pub texture: Option<String>,
}

impl Default for ObjExportOptions {
    fn default() -> Self {
        Self {
            uv_scale: 1.0,
            mtl_name: None,
            texture: None,
        }
    }
}

/// Writes the OBJ document for the cloth's current state.
pub fn write_obj<W: Write>(out: &mut W, cloth: &Cloth, opts: &ObjExportOptions) -> DrapaResult<()> {
    writeln!(out, "# cloth export")?;
    if let Some(mtl) = &opts.mtl_name {
        writeln!(out, "mtllib {mtl}")?;
    }
    writeln!(out, "usemtl {MATERIAL_NAME}")?;

    for p in cloth.positions() {
        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    for uv in cloth.uvs() {
        writeln!(
            out,
            "vt {:.6} {:.6}",
            uv.x * opts.uv_scale,
            uv.y * opts.uv_scale
        )?;
    }
    for n in cloth.normals() {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }

    writeln!(out, "s off")?;

    for tri in cloth.triangle_indices().chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Writes the MTL sidecar document.
pub fn write_mtl<W: Write>(out: &mut W, opts: &ObjExportOptions) -> DrapaResult<()> {
    writeln!(out, "newmtl {MATERIAL_NAME}")?;
    writeln!(out, "Ka 0.000 0.000 0.000")?;
    writeln!(out, "Kd 1.000 1.000 1.000")?;
    writeln!(out, "Ks 0.020 0.020 0.020")?;
    writeln!(out, "Ns 10.0")?;
    if let Some(tex) = &opts.texture {
        writeln!(out, "map_Kd -s {0} {0} 1 {1}", opts.uv_scale, tex)?;
    }
    Ok(())
}

/// Exports the cloth to `path`, creating parent directories and the
/// MTL sidecar as needed.
pub fn export_obj(cloth: &Cloth, path: &Path, opts: &ObjExportOptions) -> DrapaResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut obj = BufWriter::new(fs::File::create(path)?);
    write_obj(&mut obj, cloth, opts)?;
    obj.flush()?;

    if let Some(mtl_name) = &opts.mtl_name {
        let mtl_path = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(mtl_name),
            _ => Path::new(mtl_name).to_path_buf(),
        };
        let mut mtl = BufWriter::new(fs::File::create(&mtl_path)?);
        write_mtl(&mut mtl, opts)?;
        mtl.flush()?;
    }

    Ok(())
}
