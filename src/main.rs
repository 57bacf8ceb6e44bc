//! Demo entry point: renders one model to `output.bmp`.

use std::error::Error;
use std::path::Path;

use softgl::prelude::*;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 1000;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rend = Renderer::new(WIDTH, HEIGHT);
    rend.set_vertex_shader(PipelineVertexShader);
    rend.set_fragment_shader(TextureFragmentShader);

    rend.look_at(Vec3::new(-5.0, -5.0, -5.0), Vec3::new(0.0, 0.0, -3.0))?;

    let texture = Path::new("model.bmp");
    rend.load_model(
        "model.obj",
        texture.exists().then_some(texture),
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::ZERO,
        Vec3::ONE,
    )?;

    rend.render()?;
    rend.write_bmp("output.bmp")?;

    Ok(())
}
