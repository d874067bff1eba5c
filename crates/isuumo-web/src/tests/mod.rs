mod estate;
