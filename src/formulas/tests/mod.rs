mod or;
